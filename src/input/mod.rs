pub mod pointer;
pub mod stroke;
