pub mod client_options;
pub mod download_target;
pub mod upload_content;
pub mod webdav_client;
pub mod webdav_error;

// 重导出公共类型
pub use client_options::ClientOptions;
pub use download_target::DownloadTarget;
pub use upload_content::UploadContent;
pub use webdav_client::WebdavClient;
pub use webdav_error::WebdavError;
