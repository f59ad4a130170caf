//! Movement options.

/// How a single move request treats ignored positions and failures.
///
/// ```
/// use listwalk_core::MoveOptions;
///
/// let opts = MoveOptions::new().jump(false).silent(true);
/// assert!(!opts.jump && opts.silent);
/// assert_eq!(MoveOptions::default(), MoveOptions::new());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MoveOptions {
    /// Allow the move to pass over a run of ignored positions and land on
    /// the first one that is not ignored.
    ///
    /// When `false`, an ignored position directly next to the cursor blocks
    /// the move. Default: `true`.
    pub jump: bool,

    /// Turn boundary and blocked failures into a no-op that returns the
    /// current cursor element. Default: `false`.
    pub silent: bool,
}

impl MoveOptions {
    /// Default for [`MoveOptions::jump`].
    pub const DEFAULT_JUMP: bool = true;

    /// Default for [`MoveOptions::silent`].
    pub const DEFAULT_SILENT: bool = false;

    /// Single step that refuses to pass ignored positions.
    pub const STEP: Self = Self {
        jump: false,
        silent: false,
    };

    /// Jumping move that never fails; useful for probing.
    pub const PROBE: Self = Self {
        jump: true,
        silent: true,
    };

    /// Options with default values.
    pub const fn new() -> Self {
        Self {
            jump: Self::DEFAULT_JUMP,
            silent: Self::DEFAULT_SILENT,
        }
    }

    /// Set [`MoveOptions::jump`].
    pub const fn jump(mut self, jump: bool) -> Self {
        self.jump = jump;
        self
    }

    /// Set [`MoveOptions::silent`].
    pub const fn silent(mut self, silent: bool) -> Self {
        self.silent = silent;
        self
    }
}

impl Default for MoveOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_jump_and_report() {
        let opts = MoveOptions::default();
        assert!(opts.jump);
        assert!(!opts.silent);
    }

    #[test]
    fn presets() {
        assert_eq!(MoveOptions::STEP, MoveOptions::new().jump(false));
        assert_eq!(MoveOptions::PROBE, MoveOptions::new().silent(true));
    }
}
