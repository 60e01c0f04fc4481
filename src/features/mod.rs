//! Collaborators around the codec: the hashing primitive that produces tags.

pub mod hashing;
