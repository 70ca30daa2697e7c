//! 대시보드 스냅샷 수집 CLI.

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dashboard_collector::{modules, snapshot, CollectorConfig};

#[derive(Parser)]
#[command(name = "dashboard-collector")]
#[command(about = "Macro Dashboard Snapshot Collector", long_about = None)]
#[command(version)]
struct Cli {
    /// 로그 레벨 (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// 출력 파일 경로 재정의 (기본: SNAPSHOT_OUTPUT_PATH 또는 data.json)
    #[arg(long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // 로깅 초기화
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!(
                    "dashboard_collector={level},dashboard_data={level}",
                    level = cli.log_level
                )
                .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("대시보드 스냅샷 수집 시작");

    // 설정 로드
    let mut config = CollectorConfig::from_env();
    if let Some(output) = cli.output {
        config.snapshot.output_path = output;
    }
    tracing::debug!(
        output_path = %config.snapshot.output_path.display(),
        "설정 로드 완료"
    );

    // 수집 및 기록
    let (snap, stats) = modules::collect_snapshot(&config).await;
    snapshot::write_snapshot(&snap, &config.snapshot.output_path)?;
    stats.log_summary("스냅샷 수집");

    tracing::info!("대시보드 스냅샷 수집 종료");

    Ok(())
}
