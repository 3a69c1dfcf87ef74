pub mod probe_error;
pub mod size_probe;

// 重导出公共类型
pub use probe_error::ProbeError;
pub use size_probe::SizeProbe;
