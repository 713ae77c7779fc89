// ==========================================
// 扫码生产日报 - 物料 (Article) 领域模型
// ==========================================
// 记录只保存 article_id, 名称等在读取时经 ArticleCatalog 解析,
// 物料编辑后不会出现记录内的过期副本
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

// ==========================================
// Article - 物料
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub id: Uuid,                         // 物料唯一标识
    pub name: String,                     // 物料名称（分组键）
    #[serde(default)]
    pub description: Option<String>,      // 描述
    #[serde(default)]
    pub expected_piece_count: Option<u32>, // 期望件数（仅用于审核比较,从不由记录反算）
}

impl Article {
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: None,
            expected_piece_count: None,
        }
    }

    pub fn with_expected_piece_count(mut self, count: u32) -> Self {
        self.expected_piece_count = Some(count);
        self
    }
}

// ==========================================
// ArticleCatalog - 物料目录（只读快照）
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<Article>", into = "Vec<Article>")]
pub struct ArticleCatalog {
    articles: HashMap<Uuid, Article>,
}

impl ArticleCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入或替换物料（同 id 覆盖）
    pub fn insert(&mut self, article: Article) {
        self.articles.insert(article.id, article);
    }

    pub fn get(&self, id: &Uuid) -> Option<&Article> {
        self.articles.get(id)
    }

    /// 按可选 id 解析物料; id 缺失或悬空均返回 None
    pub fn resolve(&self, id: Option<&Uuid>) -> Option<&Article> {
        id.and_then(|id| self.articles.get(id))
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

impl From<Vec<Article>> for ArticleCatalog {
    fn from(articles: Vec<Article>) -> Self {
        let mut catalog = ArticleCatalog::new();
        for article in articles {
            catalog.insert(article);
        }
        catalog
    }
}

impl From<ArticleCatalog> for Vec<Article> {
    fn from(catalog: ArticleCatalog) -> Self {
        let mut articles: Vec<Article> = catalog.articles.into_values().collect();
        articles.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        articles
    }
}
