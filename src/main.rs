use std::path::PathBuf;

use anyhow::{Context, Result};
use assignment_quiz::models::{load_questions_file, questions_to_json, AnswerMap};
use assignment_quiz::utils::logging;
use assignment_quiz::{App, AssignmentFlow, Config, ExamScorer};
use clap::{Parser, Subcommand};
use tracing::info;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML 配置文件（缺省时只读取环境变量）
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 从 docx / JSON / TOML 文件中读取题目，输出 JSON
    Extract {
        file: PathBuf,
        /// 输出文件，缺省时打印到标准输出
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// 对一份答案评分
    Grade {
        /// 题目文件（JSON / TOML）
        #[arg(short, long)]
        questions: PathBuf,
        /// 答案文件，JSON 对象：{"question_0": "B", ...}
        #[arg(short, long)]
        answers: PathBuf,
        /// 满分，缺省使用配置中的默认值
        #[arg(short, long)]
        max_score: Option<u32>,
    },
    /// 批量导入目录中的文档
    Batch {
        /// 缺省时扫描配置中的作业目录
        folder: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 加载配置
    let config = match &args.config {
        Some(path) => Config::from_toml_file(path)?,
        None => Config::from_env(),
    };

    // 初始化日志
    logging::init(config.verbose_logging);

    match args.command {
        Command::Extract { file, output } => {
            let flow = AssignmentFlow::new(&config);
            let questions = flow.load_questions(&file).await?.unwrap_or_default();
            let json = questions_to_json(&questions)?;
            match output {
                Some(path) => {
                    tokio::fs::write(&path, json)
                        .await
                        .with_context(|| format!("无法写入文件: {}", path.display()))?;
                    info!("✓ {} 道题目已写入 {}", questions.len(), path.display());
                }
                None => println!("{}", json),
            }
        }
        Command::Grade {
            questions,
            answers,
            max_score,
        } => {
            let questions = load_questions_file(&questions).await?;
            let content = tokio::fs::read_to_string(&answers)
                .await
                .with_context(|| format!("无法读取答案文件: {}", answers.display()))?;
            let answers: AnswerMap = serde_json::from_str(&content)
                .with_context(|| format!("答案文件格式错误: {}", answers.display()))?;

            let outcome = ExamScorer::new().score(
                &questions,
                &answers,
                max_score.unwrap_or(config.default_max_score),
            );
            println!("{}", serde_json::to_string(&outcome)?);
            info!("{}", outcome.message());
        }
        Command::Batch { folder } => {
            let app = App::initialize(config)?;
            app.run(folder.as_deref()).await?;
        }
    }

    Ok(())
}
