pub mod init;      // subscriber global (binários)
pub mod tracingx;  // EnvFilter a partir do ambiente
pub mod wrap;      // histograma de duração por operação
