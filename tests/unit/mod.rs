//! Unit tests mirroring the `src/` tree

mod layout;
mod render;
