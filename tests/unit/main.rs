//! Unit test harness mirroring the source module tree

mod compose;
mod io;
