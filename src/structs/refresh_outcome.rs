use crate::enums::category::Category;
use crate::errors::RoleboardResult;

/// Result of one category run within a refresh; `Ok` holds the number of
/// ranked entries published.
#[derive(Debug)]
pub struct RefreshOutcome {
    pub category: Category,
    pub result: RoleboardResult<usize>,
}

impl RefreshOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}
