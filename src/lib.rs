/// 内部导出的模块
mod internal;

#[cfg(test)]
mod tests;

/// 导出核心入口：客户端与构造参数
pub use internal::client::structs::{
    ClientOptions, DownloadTarget, UploadContent, WebdavClient, WebdavError,
};
pub use reqwest::StatusCode;

pub mod client {
    use crate::internal;
    pub use internal::client::structs::*;
    pub use internal::client::structs::client_options::env_var_names;
}

pub mod auth {
    use crate::internal;
    pub use internal::auth::enums::AuthScheme;
    pub use internal::auth::structs::WebdavCredentials;
}

/// 传输层，需要自定义连接行为或替换 HTTP 实现时使用
pub mod transport {
    use crate::internal;
    pub use internal::transport::structs::*;
    pub use internal::transport::structs::transport_response::ByteStream;
    pub use internal::transport::traits::Transport;
}

/// 对外提供webdav基础能力，不能限制死在客户端中，以防有人自己要用
pub mod webdav {
    pub mod enums {
        use crate::internal;
        pub use internal::webdav::enums::*;
    }

    pub mod structs {
        use crate::internal;
        pub use internal::webdav::structs::*;
    }
}
