use crate::{error::Error, result::Result};

/// A result which carries no payload on success, for operations whose
/// interesting outcome is solely whether they failed.
pub type UnitResult = Result<()>;

impl Result<()> {
    /// The successful, payloadless result.
    pub const SUCCESS: Self = Self::Success(());

    /// The failed, payloadless result.
    pub fn from_err(error: Error) -> Self {
        Self::Failure(error)
    }

    /// [`fold`](Result::fold) whose success branch takes no argument.
    pub fn fold_unit<R>(
        self,
        on_success: impl FnOnce() -> R,
        on_failure: impl FnOnce(Error) -> R,
    ) -> R {
        self.fold(|()| on_success(), on_failure)
    }

    /// [`visit`](Result::visit) whose success branch takes no argument.
    pub fn visit_unit(&self, on_success: impl FnOnce(), on_failure: impl FnOnce(&Error)) {
        self.visit(|_| on_success(), on_failure)
    }
}
