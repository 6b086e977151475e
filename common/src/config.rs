#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Output verbosity reduction.
    ///
    /// `0` prints everything, `1` drops decorations, `2` prints bare results only.
    pub quiet: u8,
    /// Skips the banner printed at startup.
    pub no_banner: bool,
}
