/// 内部导出的模块
mod internal;

#[cfg(test)]
mod tests;

/// 导出核心入口函数
pub use internal::entrance::remote::*;

pub mod config {
    use crate::internal;
    pub use internal::config::structs::*;
}

/// 下载任务与分片模型，以及区间划分
pub mod task {
    use crate::internal;
    pub use internal::task::structs::*;
    pub use internal::task::functions::partition::partition;
}

pub mod http {
    pub use crate::internal::http::functions::build_client::build_client;
}

pub mod probe {
    use crate::internal;
    pub use internal::probe::structs::*;
}

/// 输出文件写入：共享句柄与每分片独立句柄两种实现
pub mod writer {
    use crate::internal;
    pub use internal::writer::structs::*;
    pub use internal::writer::traits::chunk_sink::ChunkSink;
}

pub mod downloader {
    use crate::internal;
    pub use internal::downloader::structs::*;
}

pub mod coordinator {
    use crate::internal;
    pub use internal::coordinator::structs::*;
}

pub mod local_file {
    use crate::internal;
    pub use internal::local_file::functions::*;
}

pub mod report {
    use crate::internal;
    pub use internal::report::functions::*;
}

pub mod states {
    pub mod unlock_reactive {
        use crate::internal;
        pub use internal::states::unlock_reactive::*;
    }
}
