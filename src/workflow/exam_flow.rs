//! 考试提交流程 - 流程层
//!
//! 每个学生对每份作业只能提交一次；评分本身交给 `ExamScorer`

use chrono::Utc;
use std::collections::HashMap;
use tracing::{info, warn};

use crate::error::{AppError, AppResult};
use crate::models::assignment::Assignment;
use crate::models::submission::{AnswerMap, ExamSubmission};
use crate::services::ExamScorer;

/// 考试提交流程
///
/// 以 `(作业ID, 学生ID)` 为键保存提交记录
#[derive(Debug, Default)]
pub struct ExamFlow {
    scorer: ExamScorer,
    submissions: HashMap<(u64, u64), ExamSubmission>,
}

impl ExamFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// 提交答案并评分
    ///
    /// 同一学生重复提交同一作业时返回 `AlreadySubmitted`，不会重新评分
    pub fn submit(
        &mut self,
        assignment: &Assignment,
        student_id: u64,
        answers: AnswerMap,
    ) -> AppResult<&ExamSubmission> {
        let key = (assignment.id, student_id);
        if self.submissions.contains_key(&key) {
            warn!(
                "[作业 {}] ⚠️ 学生 {} 已提交过，拒绝重复提交",
                assignment.id, student_id
            );
            return Err(AppError::already_submitted(assignment.id, student_id));
        }

        let outcome = self
            .scorer
            .score(assignment.questions(), &answers, assignment.max_score);
        info!(
            "[作业 {}] 学生 {} 提交完成: {}",
            assignment.id,
            student_id,
            outcome.message()
        );

        let submission = ExamSubmission {
            assignment_id: assignment.id,
            student_id,
            answers,
            score: outcome.score,
            status: outcome.status,
            submitted_at: Utc::now(),
        };

        Ok(self.submissions.entry(key).or_insert(submission))
    }

    /// 查询某个学生对某份作业的提交记录
    pub fn submission(&self, assignment_id: u64, student_id: u64) -> Option<&ExamSubmission> {
        self.submissions.get(&(assignment_id, student_id))
    }

    /// 某个学生的全部提交，按提交时间倒序
    pub fn submissions_for_student(&self, student_id: u64) -> Vec<&ExamSubmission> {
        let mut list: Vec<_> = self
            .submissions
            .values()
            .filter(|s| s.student_id == student_id)
            .collect();
        list.sort_by(|a, b| b.submitted_at.cmp(&a.submitted_at));
        list
    }
}
