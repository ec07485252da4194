/// Execution strategy used to fill a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Backend {
    Serial,
    #[default]
    CpuParallel,
    GpuSingle,
    GpuDouble,
}

impl Backend {
    pub const ALL: &'static [Self] = &[
        Self::Serial,
        Self::CpuParallel,
        Self::GpuSingle,
        Self::GpuDouble,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Serial => "Serial",
            Self::CpuParallel => "CPU parallel",
            Self::GpuSingle => "GPU single precision",
            Self::GpuDouble => "GPU double precision",
        }
    }

    #[must_use]
    pub const fn is_gpu(self) -> bool {
        matches!(self, Self::GpuSingle | Self::GpuDouble)
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
