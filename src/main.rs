fn main() -> anyhow::Result<()> {
    fixie_static_ip_lib::run()
}
