//! 题目抽取服务 - 业务能力层
//!
//! 把文档段落转换为结构化的题目列表。
//!
//! 每一行先经过 [`LineKind::classify`] 分类，再交给累加器处理：
//! - `Q:` / `Question:` / `Q.` / `Question.` 开启一道新题（上一题入列）
//! - `A:`..`D:`、`A)`..`D)` 追加为当前题目的选项
//! - `Answer:` / `Correct:` 设置当前题目的正确答案（后出现的覆盖先出现的）
//! - 其余行忽略
//!
//! 所有前缀都按小写后的行做前缀匹配，大小写不敏感。

use crate::models::question::Question;
use crate::utils::logging::truncate_text;
use tracing::debug;

const QUESTION_PREFIXES: [&str; 4] = ["q:", "question:", "q.", "question."];
const OPTION_PREFIXES: [&str; 8] = ["a:", "b:", "c:", "d:", "a)", "b)", "c)", "d)"];
const ANSWER_PREFIXES: [&str; 2] = ["answer:", "correct:"];

/// 单行文本的分类结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// 新题目开始，携带整行作为题干
    QuestionStart(&'a str),
    /// 选项行，携带整行
    Option(&'a str),
    /// 答案行，携带第一个冒号之后（已 trim）的内容
    Answer(&'a str),
    /// 无法识别的行
    Other,
}

impl<'a> LineKind<'a> {
    /// 按优先级对一行（已 trim）进行分类：题目 > 选项 > 答案 > 其它
    pub fn classify(line: &'a str) -> Self {
        let lower = line.to_lowercase();
        let starts_with_any = |prefixes: &[&str]| prefixes.iter().any(|p| lower.starts_with(p));

        if starts_with_any(&QUESTION_PREFIXES) {
            LineKind::QuestionStart(line)
        } else if starts_with_any(&OPTION_PREFIXES) {
            LineKind::Option(line)
        } else if starts_with_any(&ANSWER_PREFIXES) {
            match line.split_once(':') {
                Some((_, answer)) => LineKind::Answer(answer.trim()),
                None => LineKind::Other,
            }
        } else {
            LineKind::Other
        }
    }
}

/// 题目抽取服务
///
/// 无状态，可在多个请求间共享
#[derive(Debug, Default, Clone, Copy)]
pub struct QuestionExtractor;

impl QuestionExtractor {
    pub fn new() -> Self {
        Self
    }

    /// 从段落序列中抽取题目
    ///
    /// 段落会先 trim，空段落直接跳过且不影响状态
    pub fn extract<I, S>(&self, paragraphs: I) -> Vec<Question>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut questions = Vec::new();
        let mut current: Option<Question> = None;

        for paragraph in paragraphs {
            let line = paragraph.as_ref().trim();
            if line.is_empty() {
                continue;
            }

            match LineKind::classify(line) {
                LineKind::QuestionStart(prompt) => {
                    questions.extend(current.replace(Question::new(prompt)));
                }
                LineKind::Option(option) => {
                    if let Some(question) = current.as_mut() {
                        question.options.push(option.to_string());
                    }
                }
                LineKind::Answer(answer) => {
                    if let Some(question) = current.as_mut() {
                        question.correct_answer = answer.to_string();
                    }
                }
                LineKind::Other => {
                    debug!("忽略无法识别的行: {}", truncate_text(line, 40));
                }
            }
        }

        questions.extend(current.take());
        questions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_priority_and_case() {
        assert_eq!(LineKind::classify("Q: hi"), LineKind::QuestionStart("Q: hi"));
        assert_eq!(
            LineKind::classify("QUESTION. 1"),
            LineKind::QuestionStart("QUESTION. 1")
        );
        assert_eq!(LineKind::classify("question:x"), LineKind::QuestionStart("question:x"));
        assert_eq!(LineKind::classify("b) Blue"), LineKind::Option("b) Blue"));
        assert_eq!(LineKind::classify("D: last"), LineKind::Option("D: last"));
        assert_eq!(LineKind::classify("ANSWER:  B: Blue "), LineKind::Answer("B: Blue"));
        assert_eq!(LineKind::classify("Correct: A"), LineKind::Answer("A"));
        assert_eq!(LineKind::classify("E: not an option"), LineKind::Other);
        assert_eq!(LineKind::classify("Quiz notes"), LineKind::Other);
        assert_eq!(LineKind::classify("1. numbered"), LineKind::Other);
    }

    #[test]
    fn test_classify_is_prefix_based() {
        // 只要以前缀开头即可，不要求完整的词
        assert_eq!(LineKind::classify("q.e.d."), LineKind::QuestionStart("q.e.d."));
        assert_eq!(LineKind::classify("a:b:c"), LineKind::Option("a:b:c"));
        assert_eq!(LineKind::classify("Correct:"), LineKind::Answer(""));
    }

    #[test]
    fn test_empty_input() {
        let extractor = QuestionExtractor::new();
        assert!(extractor.extract(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_no_question_start_yields_nothing() {
        let extractor = QuestionExtractor::new();
        let lines = ["A: Red", "B: Blue", "Answer: B", "Some heading", "c) other"];
        assert!(extractor.extract(lines).is_empty());
    }

    #[test]
    fn test_single_question() {
        let extractor = QuestionExtractor::new();
        let lines = ["Q: What color is the sky?", "A: Red", "B: Blue", "Answer: B: Blue"];

        let questions = extractor.extract(lines);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].prompt, "Q: What color is the sky?");
        assert_eq!(questions[0].options, vec!["A: Red", "B: Blue"]);
        assert_eq!(questions[0].correct_answer, "B: Blue");
        assert_eq!(questions[0].points, 1);
    }

    #[test]
    fn test_consecutive_blocks_and_final_flush() {
        let extractor = QuestionExtractor::new();
        let lines = [
            "Q: first",
            "A: one",
            "Answer: one",
            "",
            "Question: second",
            "a) two",
            "b) three",
        ];

        let questions = extractor.extract(lines);
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].prompt, "Q: first");
        assert_eq!(questions[0].options, vec!["A: one"]);
        assert_eq!(questions[0].correct_answer, "one");
        assert_eq!(questions[1].prompt, "Question: second");
        assert_eq!(questions[1].options, vec!["a) two", "b) three"]);
        assert_eq!(questions[1].correct_answer, "");
    }

    #[test]
    fn test_answer_before_options_and_last_answer_wins() {
        let extractor = QuestionExtractor::new();
        let lines = ["Q: order", "Answer: A", "A: x", "Correct: B", "B: y"];

        let questions = extractor.extract(lines);
        assert_eq!(questions[0].options, vec!["A: x", "B: y"]);
        assert_eq!(questions[0].correct_answer, "B");
    }

    #[test]
    fn test_lines_before_first_question_are_dropped() {
        let extractor = QuestionExtractor::new();
        let lines = ["A: orphan", "Answer: orphan", "Q: real", "B: kept"];

        let questions = extractor.extract(lines);
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].options, vec!["B: kept"]);
        assert_eq!(questions[0].correct_answer, "");
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let extractor = QuestionExtractor::new();
        let lines = ["Q: 1", "A: a", "Answer: a", "Q: 2", "B: b", "Correct: b"];

        let first = crate::models::questions_to_json(&extractor.extract(lines)).unwrap();
        let second = crate::models::questions_to_json(&extractor.extract(lines)).unwrap();
        assert_eq!(first, second);
    }
}
