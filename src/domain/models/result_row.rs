// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 成绩表中的一行
///
/// 每次检查时从页面重新构建，检查结束后丢弃
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResultRow {
    /// 行在表体中的位置（从0开始）
    pub position: usize,
    /// 课程名称
    pub course_name: String,
    /// 课程学期
    pub course_term: String,
    /// 发布日期
    pub published_date: String,
}

impl ResultRow {
    pub fn new(
        position: usize,
        course_name: impl Into<String>,
        course_term: impl Into<String>,
        published_date: impl Into<String>,
    ) -> Self {
        Self {
            position,
            course_name: course_name.into().trim().to_string(),
            course_term: course_term.into().trim().to_string(),
            published_date: published_date.into().trim().to_string(),
        }
    }

    /// 行的自然键
    ///
    /// 格式为 `课程名称|课程学期|发布日期`，区分大小写
    pub fn identifier(&self) -> String {
        format!(
            "{}|{}|{}",
            self.course_name, self.course_term, self.published_date
        )
    }

    /// 课程名称是否包含搜索词（不区分大小写的子串匹配）
    pub fn matches(&self, search_term: &str) -> bool {
        self.course_name
            .to_lowercase()
            .contains(&search_term.to_lowercase())
    }

    /// 通知邮件中的详情块
    pub fn details(&self) -> String {
        format!(
            "Course Name: {}\nCourse Term: {}\nPublished Date: {}\nRow Index (0-based): {}\n",
            self.course_name, self.course_term, self.published_date, self.position
        )
    }
}
