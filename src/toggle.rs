//! Customer Field Group Toggle
//!
//! One checkbox decides which customer group is live: the existing-customer
//! selector or the new-customer fields. Exactly one group is shown and
//! enabled at any time.

/// Which customer group the form uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CustomerMode {
    /// Checkbox set: pick an existing customer
    Registered,
    /// Checkbox cleared: type in a new customer
    #[default]
    New,
}

impl CustomerMode {
    pub fn from_checked(checked: bool) -> Self {
        if checked {
            CustomerMode::Registered
        } else {
            CustomerMode::New
        }
    }

    pub fn is_registered(self) -> bool {
        self == CustomerMode::Registered
    }

    pub fn groups(self) -> FieldGroups {
        let registered = self.is_registered();
        FieldGroups {
            existing: GroupState { visible: registered, enabled: registered },
            new: GroupState { visible: !registered, enabled: !registered },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupState {
    pub visible: bool,
    pub enabled: bool,
}

/// State of both groups for one checkbox value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldGroups {
    /// Group A: existing-customer selector
    pub existing: GroupState,
    /// Group B: new-customer fields
    pub new: GroupState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_enables_existing_group_only() {
        let groups = CustomerMode::from_checked(true).groups();
        assert_eq!(groups.existing, GroupState { visible: true, enabled: true });
        assert_eq!(groups.new, GroupState { visible: false, enabled: false });
    }

    #[test]
    fn test_cleared_enables_new_group_only() {
        let groups = CustomerMode::from_checked(false).groups();
        assert_eq!(groups.existing, GroupState { visible: false, enabled: false });
        assert_eq!(groups.new, GroupState { visible: true, enabled: true });
    }

    #[test]
    fn test_groups_never_both_enabled_or_disabled() {
        for checked in [true, false] {
            let groups = CustomerMode::from_checked(checked).groups();
            assert_ne!(groups.existing.enabled, groups.new.enabled);
            assert_ne!(groups.existing.visible, groups.new.visible);
        }
    }

    #[test]
    fn test_default_is_new_customer() {
        assert_eq!(CustomerMode::default(), CustomerMode::New);
        assert!(!CustomerMode::default().is_registered());
    }
}
