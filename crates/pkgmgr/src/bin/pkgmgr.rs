use pkgmgr::{Mode, PackageManager};

fn main() {
    pkgmgr::run(Mode::Run, PackageManager::Npm)
}
