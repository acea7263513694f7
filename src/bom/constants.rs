/// Deepest pre-ferment or sub-filling chain that will be expanded.
///
/// Real recipes nest a handful of levels. Anything deeper is treated as a
/// cyclic reference and the branch stops contributing.
pub const MAX_NESTING_DEPTH: usize = 64;
