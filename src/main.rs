use create_test_user::config::Defaults;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    create_test_user::run(&Defaults, &mut out).await?;
    Ok(())
}
