//! Connectivity structure: bridges, strongly connected components, cycles.
//!
//! All three walk the graph depth-first with an explicit stack, so deep
//! graphs (long chains, large cycles) never exhaust the call stack.
//!
//! | Type | Graph | Result |
//! |------|-------|--------|
//! | [`BridgeFinder`] | undirected | edges whose removal splits a component |
//! | [`StronglyConnectedComponents`] | directed | Tarjan components + condensation |
//! | [`CycleSearch`] | either | simple cycles through a start vertex |

mod bridges;
mod cycles;
mod scc;

pub use bridges::BridgeFinder;
pub use cycles::CycleSearch;
pub use scc::StronglyConnectedComponents;
