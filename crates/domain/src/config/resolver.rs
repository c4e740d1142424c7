/// How the external bulk resolver is invoked.
///
/// The final command line is `program mode_args... forwarded_args...`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Resolver executable (default: "ruresol")
    pub program: String,

    /// Arguments selecting forward-address lookup mode (default: ["-a"])
    pub mode_args: Vec<String>,

    /// Resolver-tuning flags passed through unmodified from the command line
    pub forwarded_args: Vec<String>,
}

impl ResolverConfig {
    pub fn command_args(&self) -> impl Iterator<Item = &str> {
        self.mode_args
            .iter()
            .chain(self.forwarded_args.iter())
            .map(String::as_str)
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            mode_args: vec!["-a".to_string()],
            forwarded_args: vec![],
        }
    }
}

fn default_program() -> String {
    "ruresol".to_string()
}
