pub mod audio;
pub mod playlist;
pub mod scene;
pub mod session;
pub mod traits;
pub mod ui;
pub mod util;

#[cfg(test)]
mod test_utils;
