pub mod webdav_url;

pub use webdav_url::WebdavUrl;
