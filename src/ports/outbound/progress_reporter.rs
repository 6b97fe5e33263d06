/// ProgressReporter port for reporting progress during operations
///
/// Status lines go to stderr so they never mix with the rendered tree on
/// stdout.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Starts an indeterminate activity (e.g. waiting for Maven)
    ///
    /// # Arguments
    /// * `message` - What is being waited on
    fn start_activity(&self, message: &str);

    /// Ends the activity started with `start_activity`, if any
    fn finish_activity(&self);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
