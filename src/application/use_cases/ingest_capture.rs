// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::sync::Arc;
use tracing::info;

use crate::domain::models::capture::HandoffPayload;
use crate::domain::models::content_record::ContentRecord;
use crate::domain::models::session::Session;
use crate::domain::repositories::content_record_repository::{
    ContentRecordRepository, RepositoryError,
};
use crate::domain::services::summarizer::SummarizationService;

/// 收录结果
#[derive(Debug)]
pub enum IngestOutcome {
    /// 新记录已写入
    Added(ContentRecord),
    /// 该用户已收藏同一URL，未写入
    Duplicate,
}

/// 捕获收录用例
///
/// 消费一次交接载荷：按URL去重、生成摘要、落库。
/// 去重先用一次廉价的存在性检查给出友好提示；并发窗口内的
/// 重复写入由存储层唯一索引兜底，同样归为 Duplicate
pub struct IngestCaptureUseCase {
    records: Arc<dyn ContentRecordRepository>,
    summarizer: Arc<SummarizationService>,
}

impl IngestCaptureUseCase {
    /// 创建新的捕获收录用例实例
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

    /// 执行收录
    ///
    /// # 参数
    ///
    /// * `session` - 当前用户会话
    /// * `payload` - 交接载荷
    ///
    /// # 返回值
    ///
    /// * `Ok(IngestOutcome)` - 收录结果
    /// * `Err` - 摘要失败或存储错误，未写入任何记录
    pub async fn execute(
        &self,
        session: &Session,
        payload: HandoffPayload,
    ) -> anyhow::Result<IngestOutcome> {
        if self.records.exists(&session.email, &payload.url).await? {
            return Ok(IngestOutcome::Duplicate);
        }

        let summary = self.summarizer.summarize(&payload.summary_input()).await?;

        let record = ContentRecord::new(
            payload.title,
            payload.content_type,
            payload.url,
            summary,
            session,
        );

        match self.records.insert(&record).await {
            Ok(()) => {
                metrics::counter!("records_created_total").increment(1);
                info!(user = %record.user_email, url = %record.url, "content record ingested");
                Ok(IngestOutcome::Added(record))
            }
            Err(RepositoryError::AlreadyExists) => Ok(IngestOutcome::Duplicate),
            Err(err) => Err(err.into()),
        }
    }
}
