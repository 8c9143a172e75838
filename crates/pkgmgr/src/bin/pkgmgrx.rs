use pkgmgr::{Mode, PackageManager};

fn main() {
    pkgmgr::run(Mode::Exec, PackageManager::Npm)
}
