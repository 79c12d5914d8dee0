pub mod webdav_credentials;

pub use webdav_credentials::WebdavCredentials;
