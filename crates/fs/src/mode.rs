use std::fmt;

use bitflags::bitflags;

const S_IFMT: u32 = 0o170_000;

bitflags! {
    /// Permission bits of `st_mode`, without the file type.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Permissions: u32 {
        const SETUID = 0o4000;
        const SETGID = 0o2000;
        const STICKY = 0o1000;

        const OWNER_READ = 0o400;
        const OWNER_WRITE = 0o200;
        const OWNER_EXEC = 0o100;

        const GROUP_READ = 0o040;
        const GROUP_WRITE = 0o020;
        const GROUP_EXEC = 0o010;

        const OTHER_READ = 0o004;
        const OTHER_WRITE = 0o002;
        const OTHER_EXEC = 0o001;

        const ANY_EXEC = Self::OWNER_EXEC.bits() | Self::GROUP_EXEC.bits() | Self::OTHER_EXEC.bits();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
    Regular,
    Directory,
    Symlink,
    Fifo,
    Socket,
    BlockDevice,
    CharDevice,
    Unknown,
}

impl FileType {
    fn from_raw(raw: u32) -> Self {
        match raw & S_IFMT {
            0o100_000 => FileType::Regular,
            0o040_000 => FileType::Directory,
            0o120_000 => FileType::Symlink,
            0o010_000 => FileType::Fifo,
            0o140_000 => FileType::Socket,
            0o060_000 => FileType::BlockDevice,
            0o020_000 => FileType::CharDevice,
            _ => FileType::Unknown,
        }
    }

    /// Leading character of the `ls -l` mode column.
    pub fn symbol(self) -> char {
        match self {
            FileType::Regular => '-',
            FileType::Directory => 'd',
            FileType::Symlink => 'l',
            FileType::Fifo => 'p',
            FileType::Socket => 's',
            FileType::BlockDevice => 'b',
            FileType::CharDevice => 'c',
            FileType::Unknown => '?',
        }
    }
}

/// Raw `st_mode` as reported by `lstat`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileMode(u32);

impl FileMode {
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub fn file_type(self) -> FileType {
        FileType::from_raw(self.0)
    }

    pub fn permissions(self) -> Permissions {
        Permissions::from_bits_truncate(self.0)
    }

    pub fn is_dir(self) -> bool {
        self.file_type() == FileType::Directory
    }

    pub fn is_regular(self) -> bool {
        self.file_type() == FileType::Regular
    }

    /// Any of the owner, group or other execute bits.
    pub fn is_executable(self) -> bool {
        self.permissions().intersects(Permissions::ANY_EXEC)
    }

    /// Ten character mode string, e.g. `drwxr-xr-x` or `-rwsr-x--T`.
    pub fn symbolic(self) -> String {
        let p = self.permissions();
        let mut out = String::with_capacity(10);
        out.push(self.file_type().symbol());

        let triplets = [
            (
                Permissions::OWNER_READ,
                Permissions::OWNER_WRITE,
                Permissions::OWNER_EXEC,
                Permissions::SETUID,
                ('s', 'S'),
            ),
            (
                Permissions::GROUP_READ,
                Permissions::GROUP_WRITE,
                Permissions::GROUP_EXEC,
                Permissions::SETGID,
                ('s', 'S'),
            ),
            (
                Permissions::OTHER_READ,
                Permissions::OTHER_WRITE,
                Permissions::OTHER_EXEC,
                Permissions::STICKY,
                ('t', 'T'),
            ),
        ];

        for (read, write, exec, special, (with_exec, without_exec)) in triplets {
            out.push(if p.contains(read) { 'r' } else { '-' });
            out.push(if p.contains(write) { 'w' } else { '-' });
            out.push(match (p.contains(exec), p.contains(special)) {
                (true, true) => with_exec,
                (false, true) => without_exec,
                (true, false) => 'x',
                (false, false) => '-',
            });
        }

        out
    }
}

impl fmt::Display for FileMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbolic())
    }
}

#[cfg(test)]
#[path = "mode_tests.rs"]
mod tests;
