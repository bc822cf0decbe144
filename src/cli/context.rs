use std::sync::OnceLock;

static VERBOSITY: OnceLock<Verbosity> = OnceLock::new();

/// How chatty the CLI output should be.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Verbosity {
    pub verbose: bool,
    pub quiet: bool,
}

/// Initialize the global output verbosity. Only the first call wins.
///
/// `quiet` overrides `verbose`.
pub fn init(verbose: bool, quiet: bool) {
    let _ = VERBOSITY.set(Verbosity {
        verbose: verbose && !quiet,
        quiet,
    });
}

/// Current output verbosity; defaults to normal output.
pub fn verbosity() -> Verbosity {
    VERBOSITY.get().copied().unwrap_or_default()
}
