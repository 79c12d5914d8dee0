use std::path::Path;

use percent_encoding::percent_decode_str;
use url::Url;

use crate::internal::client::structs::webdav_error::WebdavError;

/// 服务器地址结构体
///
/// 构造时拆出 scheme / 主机 / 端口 / 路径，之后只读：
/// - `host`：`scheme://host[:port]`，没有显式端口时不带端口
/// - `base_url`：构造 URL 的路径按引用解析规则拼到 `host` 上
///
/// 构造 URL 中的用户信息不会保留在这里，见 [`UserInfo`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebdavUrl {
    host: String,
    base_url: Url,
}

/// 构造 URL 中内嵌的 `user:pass@`，已做百分号解码
#[derive(Clone, PartialEq, Eq)]
pub(crate) struct UserInfo {
    pub username: String,
    pub password: String,
}

impl WebdavUrl {
    pub fn parse(raw: &str) -> Result<Self, WebdavError> {
        Self::parse_with_user_info(raw).map(|(url, _)| url)
    }

    pub(crate) fn parse_with_user_info(
        raw: &str,
    ) -> Result<(Self, Option<UserInfo>), WebdavError> {
        if raw.trim().is_empty() {
            return Err(WebdavError::InvalidBaseUrl("路径为空".to_string()));
        }

        let parsed = Url::parse(raw)
            .map_err(|e| WebdavError::InvalidBaseUrl(e.to_string()))?;

        let hostname = parsed.host_str().ok_or_else(|| {
            WebdavError::InvalidBaseUrl(format!("缺少主机名: {}", parsed.scheme()))
        })?;

        // url 解析器会把显式写出的默认端口（如 http 的 :80）规范化掉，这里也就不带
        let host = match parsed.port() {
            Some(port) => format!("{}://{}:{}", parsed.scheme(), hostname, port),
            None => format!("{}://{}", parsed.scheme(), hostname),
        };

        let base_url = Url::parse(&host)?.join(parsed.path())?;

        let user_info = if !parsed.username().is_empty()
            || parsed.password().is_some()
        {
            Some(UserInfo {
                username: _decode(parsed.username()),
                password: _decode(parsed.password().unwrap_or_default()),
            })
        } else {
            None
        };

        Ok((Self { host, base_url }, user_info))
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// 按引用解析规则把路径拼到 `base_url` 上
    ///
    /// - 相对路径替换基准路径的最后一段：`/a/b` + `c` = `/a/c`
    /// - 以 `/` 开头的路径替换整个路径
    pub fn resolve(&self, path: &str) -> Result<Url, WebdavError> {
        Ok(self.base_url.join(path)?)
    }

    /// 目标资源的所有祖先集合，从浅到深
    ///
    /// 最后一段是资源本身，不会出现在结果里：
    /// `/a/b/c/file.txt` 得到 `/a`、`/a/b`、`/a/b/c`
    pub fn ancestor_urls(&self, path: &str) -> Result<Vec<Url>, WebdavError> {
        let target = self.resolve(path)?;
        Ok(_ancestors(&target, false))
    }

    /// 与 [`ancestor_urls`](Self::ancestor_urls) 相同，但跳过带扩展名的路径段
    ///
    /// 注意：名字里带点的目录（如 `v1.2`）也会被当成文件跳过
    pub fn eager_ancestor_urls(
        &self,
        path: &str,
    ) -> Result<Vec<Url>, WebdavError> {
        let target = self.resolve(path)?;
        Ok(_ancestors(&target, true))
    }
}

fn _ancestors(target: &Url, skip_file_like: bool) -> Vec<Url> {
    let mut segments: Vec<&str> = target
        .path_segments()
        .map(|segments| segments.filter(|s| !s.is_empty()).collect())
        .unwrap_or_default();

    // 叶子节点是资源本身
    segments.pop();

    let mut ancestors = Vec::with_capacity(segments.len());
    for depth in 1..=segments.len() {
        if skip_file_like && _looks_like_file(segments[depth - 1]) {
            continue;
        }

        let mut url = target.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.set_path(&format!("/{}", segments[..depth].join("/")));
        ancestors.push(url);
    }

    ancestors
}

fn _looks_like_file(segment: &str) -> bool {
    Path::new(segment).extension().is_some()
}

fn _decode(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}
