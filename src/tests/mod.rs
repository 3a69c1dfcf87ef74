//! 测试模块入口：公共逻辑（测试服务器、配置）在 `lib` 子模块，各组件测试在 `internal`。

#[cfg(test)]
pub use lib::*;
