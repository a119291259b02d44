//! Branch & bound (§4.4, §4.5): three traversal orders over the same
//! underlying search tree - best-first by lower bound (`lc`), and two
//! simpler node-at-a-time orders (`bfs`, `dfs`). All three must agree with
//! `bf` on the optimal cost (P3); they differ only in exploration order and
//! node memory footprint.

pub mod bfs;
pub mod dfs;
pub mod lc;
