mod symbol;
mod text_path_line;

pub use symbol::{LineSymbol, TextPathSymbol};
pub use text_path_line::{Painted, TextPathLine};
