//! Sentence similarity graph
//!
//! LexRank ranks sentences over a directed graph with an edge `i -> j`
//! wherever `sim(i, j)` reaches the threshold. The graph is stored in
//! compressed sparse row form, see [`csr::SentenceGraph`].

pub mod csr;
