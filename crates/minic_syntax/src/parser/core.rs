// Parser core types and entrypoint.
//
// This chunk defines the [`Parser`] type, its configuration, and the top-level `parse()` loop.
//
// ## Notes
// - This file is `include!`'d into `crate::parser` to keep all parser methods in a
//   single module while avoiding a single “god file”.

/// Deepest nesting of expressions and statements the recursive-descent parser will follow.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
    /// Stop after this many errors. `0` means no limit.
    pub max_errors: usize,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            max_errors: DEFAULT_MAX_ERRORS,
        }
    }
}

impl ParseConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_errors(mut self, max_errors: usize) -> Self {
        self.max_errors = max_errors;
        self
    }
}

/// Outcome of a parse: the (possibly partial) tree plus every diagnostic recorded on the way.
#[derive(Debug, Clone)]
pub struct ParseOutput {
    pub program: Program,
    pub errors: Vec<CompileError>,
}

impl ParseOutput {
    /// `true` if no error-severity diagnostic was recorded.
    pub fn is_ok(&self) -> bool {
        !self.errors.iter().any(CompileError::is_error)
    }

    /// Collapse into the fail-on-any-error shape.
    pub fn into_result(self) -> Result<Program, Vec<CompileError>> {
        if self.is_ok() { Ok(self.program) } else { Err(self.errors) }
    }
}

/// Parser state.
///
/// ## Notes
/// - Holds exactly one lookahead token (`current`); tokens are pulled from the source on demand.
/// - `consumed` counts tokens taken from the source and backs the no-progress guard in recovery.
/// - `block_depth` tells `synchronize` whether a `}` belongs to an enclosing block.
/// - `nesting` counts active recursive rules and is capped at [`MAX_NESTING_DEPTH`].
pub struct Parser<S: TokenSource> {
    source: S,
    current: Token,
    previous_pos: Position,
    errors: Diagnostics,
    consumed: usize,
    block_depth: usize,
    nesting: usize,
}

impl<S: TokenSource> Parser<S> {
    /// Create a parser with the default configuration.
    pub fn new(source: S) -> Self {
        Self::with_config(source, ParseConfig::default())
    }

    pub fn with_config(mut source: S, config: ParseConfig) -> Self {
        let current = source.next_token();
        Self {
            previous_pos: current.pos,
            source,
            current,
            errors: Diagnostics::new(config.max_errors),
            consumed: 0,
            block_depth: 0,
            nesting: 0,
        }
    }

    /// Parse the whole token source into a [`Program`].
    ///
    /// The returned tree holds every declaration that parsed cleanly; declarations that hit a syntax error are
    /// dropped and reported in [`ParseOutput::errors`]. Reaching end of input is never an error by itself.
    pub fn parse(mut self) -> ParseOutput {
        let mut program = Program::new();

        while !self.is_at_end() && !self.errors.is_exhausted() {
            let start = self.consumed;
            match self.declaration() {
                Ok(decl) => program.add_child(decl),
                Err(e) => self.recover(e, start),
            }
        }

        tracing::debug!(
            declarations = program.declarations.len(),
            errors = self.errors.error_count(),
            "parse finished"
        );
        ParseOutput {
            program,
            errors: self.errors.into_vec(),
        }
    }
}
