//! Command table
//!
//! Every command the module understands, keyed by [`CommandId`]. Commands
//! without parameters carry their precomputed checksum; everything else is
//! checksummed when the frame is built.

/// First byte of every command and response frame
pub const FRAME_START: u8 = 0xAA;

/// Zero-parameter command with a precomputed checksum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FixedCommand {
    pub opcode: u8,
    pub checksum: u8,
}

impl FixedCommand {
    /// Frame body, without the checksum byte
    pub const fn body(&self) -> [u8; 3] {
        [FRAME_START, self.opcode, 0x00]
    }
}

/// Command with a fixed-width parameter block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TemplateCommand {
    pub opcode: u8,
    pub param_len: u8,
}

/// Wire-level shape of a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandTemplate {
    /// No parameters, checksum known at compile time
    Fixed(FixedCommand),
    /// Fixed parameter width, checksum computed at send time
    Parameterized(TemplateCommand),
    /// Device byte followed by an encoded path
    Path { opcode: u8 },
    /// Streamed list of two-character file names
    Playlist { opcode: u8 },
}

impl CommandTemplate {
    /// Opcode byte for this command
    pub const fn opcode(&self) -> u8 {
        match self {
            CommandTemplate::Fixed(cmd) => cmd.opcode,
            CommandTemplate::Parameterized(cmd) => cmd.opcode,
            CommandTemplate::Path { opcode } | CommandTemplate::Playlist { opcode } => *opcode,
        }
    }
}

const fn fixed(opcode: u8, checksum: u8) -> CommandTemplate {
    CommandTemplate::Fixed(FixedCommand { opcode, checksum })
}

const fn param(opcode: u8, param_len: u8) -> CommandTemplate {
    CommandTemplate::Parameterized(TemplateCommand { opcode, param_len })
}

/// Command identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandId {
    // Control
    Play,
    Pause,
    Stop,
    Previous,
    Next,
    VolumeIncrease,
    VolumeDecrease,
    /// Previous directory, start at its last sound
    PreviousDirLast,
    /// Previous directory, start at its first sound
    PreviousDirFirst,
    StopInterlude,
    EndCombination,
    // Queries
    QueryPlayState,
    QueryOnlineDevice,
    QueryPlayingDevice,
    QuerySoundCount,
    QueryPlayingSound,
    QueryFirstInDir,
    QuerySoundCountDir,
    // Settings
    SetVolume,
    SetCycleMode,
    SetCycleTimes,
    SetEq,
    PlaySpecified,
    PlaySpecifiedPath,
    SetPlayingDevice,
    InterludeSpecified,
    InterludeSpecifiedPath,
    Select,
    CombinationPlay,
}

impl CommandId {
    /// Every command, in table order
    pub const ALL: [CommandId; 29] = [
        CommandId::Play,
        CommandId::Pause,
        CommandId::Stop,
        CommandId::Previous,
        CommandId::Next,
        CommandId::VolumeIncrease,
        CommandId::VolumeDecrease,
        CommandId::PreviousDirLast,
        CommandId::PreviousDirFirst,
        CommandId::StopInterlude,
        CommandId::EndCombination,
        CommandId::QueryPlayState,
        CommandId::QueryOnlineDevice,
        CommandId::QueryPlayingDevice,
        CommandId::QuerySoundCount,
        CommandId::QueryPlayingSound,
        CommandId::QueryFirstInDir,
        CommandId::QuerySoundCountDir,
        CommandId::SetVolume,
        CommandId::SetCycleMode,
        CommandId::SetCycleTimes,
        CommandId::SetEq,
        CommandId::PlaySpecified,
        CommandId::PlaySpecifiedPath,
        CommandId::SetPlayingDevice,
        CommandId::InterludeSpecified,
        CommandId::InterludeSpecifiedPath,
        CommandId::Select,
        CommandId::CombinationPlay,
    ];

    /// Look up the wire template for this command
    pub const fn template(self) -> CommandTemplate {
        match self {
            CommandId::Play => fixed(0x02, 0xAC),
            CommandId::Pause => fixed(0x03, 0xAD),
            CommandId::Stop => fixed(0x04, 0xAE),
            CommandId::Previous => fixed(0x05, 0xAF),
            CommandId::Next => fixed(0x06, 0xB0),
            CommandId::VolumeIncrease => fixed(0x14, 0xBE),
            CommandId::VolumeDecrease => fixed(0x15, 0xBF),
            CommandId::PreviousDirLast => fixed(0x0E, 0xB8),
            CommandId::PreviousDirFirst => fixed(0x0F, 0xB9),
            CommandId::StopInterlude => fixed(0x10, 0xBA),
            CommandId::EndCombination => fixed(0x1C, 0xC6),

            CommandId::QueryPlayState => fixed(0x01, 0xAB),
            CommandId::QueryOnlineDevice => fixed(0x09, 0xB3),
            CommandId::QueryPlayingDevice => fixed(0x0A, 0xB4),
            CommandId::QuerySoundCount => fixed(0x0C, 0xB6),
            CommandId::QueryPlayingSound => fixed(0x0D, 0xB7),
            CommandId::QueryFirstInDir => fixed(0x11, 0xBB),
            CommandId::QuerySoundCountDir => fixed(0x12, 0xBC),

            CommandId::SetVolume => param(0x13, 1),
            CommandId::SetCycleMode => param(0x18, 1),
            CommandId::SetCycleTimes => param(0x19, 2),
            CommandId::SetEq => param(0x1A, 1),
            CommandId::PlaySpecified => param(0x07, 2),
            CommandId::PlaySpecifiedPath => CommandTemplate::Path { opcode: 0x08 },
            CommandId::SetPlayingDevice => param(0x0B, 1),
            CommandId::InterludeSpecified => param(0x16, 3),
            CommandId::InterludeSpecifiedPath => CommandTemplate::Path { opcode: 0x17 },
            CommandId::Select => param(0x1F, 2),
            CommandId::CombinationPlay => CommandTemplate::Playlist { opcode: 0x1B },
        }
    }

    /// Fixed command row, or `None` if this command takes parameters
    pub const fn fixed(self) -> Option<FixedCommand> {
        match self.template() {
            CommandTemplate::Fixed(cmd) => Some(cmd),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checksum::checksum;

    #[test]
    fn test_fixed_checksums_match_body() {
        for id in CommandId::ALL {
            if let Some(cmd) = id.fixed() {
                assert_eq!(cmd.checksum, checksum(&cmd.body()), "{:?}", id);
            }
        }
    }

    #[test]
    fn test_opcodes_are_unique() {
        for (i, a) in CommandId::ALL.iter().enumerate() {
            for b in &CommandId::ALL[i + 1..] {
                assert_ne!(a.template().opcode(), b.template().opcode(), "{:?} / {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_next_and_previous_differ() {
        assert_eq!(CommandId::Previous.template().opcode(), 0x05);
        assert_eq!(CommandId::Next.template().opcode(), 0x06);
    }

    #[test]
    fn test_template_kinds() {
        assert_eq!(
            CommandId::PlaySpecified.template(),
            CommandTemplate::Parameterized(TemplateCommand {
                opcode: 0x07,
                param_len: 2
            })
        );
        assert_eq!(
            CommandId::PlaySpecifiedPath.template(),
            CommandTemplate::Path { opcode: 0x08 }
        );
        assert_eq!(
            CommandId::CombinationPlay.template(),
            CommandTemplate::Playlist { opcode: 0x1B }
        );
        assert!(CommandId::SetVolume.fixed().is_none());
    }
}
