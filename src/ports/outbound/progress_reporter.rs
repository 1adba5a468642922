/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts progress output (e.g. to stderr) so the pipeline
/// itself never writes to the terminal and the report stream stays clean.
pub trait ProgressReporter {
    /// Reports a progress message
    ///
    /// # Arguments
    /// * `message` - The progress message to report
    fn report(&self, message: &str);

    /// Marks the start of a long-running step, such as an external
    /// diagnostic tool invocation
    fn begin_step(&self, message: &str);

    /// Marks the end of the current step
    fn finish_step(&self, message: &str);

    /// Reports an error or warning message
    ///
    /// # Arguments
    /// * `message` - The error/warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    ///
    /// # Arguments
    /// * `message` - Completion message
    fn report_completion(&self, message: &str);
}
