/// Receives notices the user should see before the build starts.
pub trait GraphReporter: Send + Sync {
    fn dot_check_skipped(&self);
}
