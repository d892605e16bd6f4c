use anyhow::Result;
use clap::Parser;
use onnx_classify::{
    config::Config,
    models::{ClassLabels, Classifier},
    BridgePipeline,
};
use std::io::Write;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "onnx-classify")]
#[command(about = "Single-shot ONNX image classification bridge")]
struct Args {
    /// 待分类图像的路径
    image: String,

    /// 模型与标签文件所在目录
    #[arg(long, default_value = "Assets/StreamingAssets")]
    assets_dir: String,

    /// Log level
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // 初始化日志系统：写到stderr，stdout保留给分类结果
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = Config::new(args.assets_dir);

    match classify(&config, &args.image) {
        Ok(label) => {
            // 不带换行输出，宿主进程按原始token读取
            print!("{label}");
            std::io::stdout().flush()?;
        }
        Err(e) => {
            tracing::error!("Classification failed ({}): {}", e.error_code(), e);
            // 诊断文本同样走stdout，进程保持0退出码：
            // 宿主侧通过文本嗅探区分成功与失败
            println!("{}", e.diagnostic());
        }
    }

    Ok(())
}

fn classify(config: &Config, image_path: &str) -> onnx_classify::Result<String> {
    let classifier = Classifier::new(config)?;
    let labels = ClassLabels::load(config.labels_path())?;

    let prediction = BridgePipeline::classify_file(&classifier, &labels, image_path)?;
    Ok(prediction.label)
}
