// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use tracing::info;

use crate::application::dto::submit_request::SubmitRequestDto;
use crate::application::use_cases::ingest_capture::IngestOutcome;
use crate::domain::models::content_record::ContentRecord;
use crate::domain::models::session::Session;
use crate::domain::repositories::content_record_repository::{
    ContentRecordRepository, RepositoryError,
};
use crate::domain::services::summarizer::SummarizationService;

/// 手动提交用例
///
/// 表单驱动的记录创建：摘要留空时先由摘要引擎生成，
/// 生成失败则整个提交中止，不产生部分写入
pub struct SubmitRecordUseCase {
    records: Arc<dyn ContentRecordRepository>,
    summarizer: Arc<SummarizationService>,
}

impl SubmitRecordUseCase {
    /// 创建新的手动提交用例实例
    ///
    /// # 参数
    ///
    /// * `records` - 内容记录仓库
    /// * `summarizer` - 摘要服务
    pub fn new(
        records: Arc<dyn ContentRecordRepository>,
        summarizer: Arc<SummarizationService>,
    ) -> Self {
        Self {
            records,
            summarizer,
        }
    }

    /// 执行提交
    ///
    /// # 参数
    ///
    /// * `session` - 当前用户会话
    /// * `request` - 提交请求
    ///
    /// # 返回值
    ///
    /// * `Ok(IngestOutcome)` - 提交结果
    /// * `Err` - 摘要失败或存储错误，未写入任何记录
    pub async fn execute(
        &self,
        session: &Session,
        request: SubmitRequestDto,
    ) -> anyhow::Result<IngestOutcome> {
        if self.records.exists(&session.email, &request.url).await? {
            return Ok(IngestOutcome::Duplicate);
        }

        let summary = match request.summary.filter(|s| !s.trim().is_empty()) {
            Some(summary) => summary,
            None => {
                let input = format!("{} {}", request.title, request.url);
                self.summarizer.summarize(&input).await?
            }
        };

        let record = ContentRecord::new(
            request.title,
            request.content_type,
            request.url,
            summary,
            session,
        );

        match self.records.insert(&record).await {
            Ok(()) => {
                metrics::counter!("records_created_total").increment(1);
                info!(user = %record.user_email, url = %record.url, "content record submitted");
                Ok(IngestOutcome::Added(record))
            }
            Err(RepositoryError::AlreadyExists) => Ok(IngestOutcome::Duplicate),
            Err(err) => Err(err.into()),
        }
    }
}
