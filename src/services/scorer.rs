//! 考试评分服务 - 业务能力层
//!
//! 纯函数，不持有状态，也不负责判断是否重复提交

use crate::models::question::{answer_key, Question};
use crate::models::submission::{AnswerMap, SubmissionOutcome};
use tracing::debug;

/// 考试评分服务
#[derive(Debug, Default, Clone, Copy)]
pub struct ExamScorer;

impl ExamScorer {
    pub fn new() -> Self {
        Self
    }

    /// 按比例计算得分
    ///
    /// - 没有题目时返回 `None` + `Submitted`（转人工批改）
    /// - 第 i 题读取 `answers["question_i"]`，非空且与正确答案完全一致（区分大小写）才得分
    /// - 结果 = 得分 / 总分 * `max_score`，总分为 0 时结果为 0
    pub fn score(
        &self,
        questions: &[Question],
        answers: &AnswerMap,
        max_score: u32,
    ) -> SubmissionOutcome {
        if questions.is_empty() {
            return SubmissionOutcome::manual();
        }

        let mut total_points: u64 = 0;
        let mut earned: u64 = 0;

        for (i, question) in questions.iter().enumerate() {
            total_points += u64::from(question.points);

            let correct = answers
                .get(&answer_key(i))
                .is_some_and(|answer| !answer.is_empty() && *answer == question.correct_answer);
            if correct {
                earned += u64::from(question.points);
            }
        }

        let result = if total_points > 0 {
            earned as f64 / total_points as f64 * f64::from(max_score)
        } else {
            0.0
        };

        debug!("评分完成: {}/{} 分, 折算 {:.1}", earned, total_points, result);
        SubmissionOutcome::graded(result)
    }
}
