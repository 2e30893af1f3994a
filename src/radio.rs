//! Packet framing and radio transmission
//!
//! Every packet on air is `[seq_hi, seq_lo, payload..]`. The 16-bit sequence
//! number is owned by the [`Transmitter`] and advances once per framed
//! packet, wrapping at `0xFFFF`, whether or not the packet reaches the air.
//!
//! Transmission is stop-and-wait and fire-and-forget: one blocking transmit
//! command per packet, no acknowledgement and no retry. A cancelled, aborted
//! or stopped command simply drops the packet. Only a termination event or
//! status code that the radio driver should never produce is an error.
//!
//! Event masks and status codes use the CC13xx RF driver encoding.

use crate::Error;
use heapless::Vec;

/// Largest payload accepted by [`Transmitter::send`]
pub const MAX_PAYLOAD_LEN: usize = 20;

/// Sequence number bytes in front of the payload
pub const HEADER_LEN: usize = 2;

/// Largest frame handed to the radio
pub const MAX_FRAME_LEN: usize = MAX_PAYLOAD_LEN + HEADER_LEN;

/// A framed packet
pub type Frame = Vec<u8, MAX_FRAME_LEN>;

/// Termination event masks
pub mod event {
    /// Stand-alone command or last command in a chain finished
    pub const LAST_CMD_DONE: u64 = 1 << 1;
    /// Command cancelled before it was started
    pub const CMD_CANCELLED: u64 = 1 << 63;
    /// Abrupt command termination
    pub const CMD_ABORTED: u64 = 1 << 62;
    /// Graceful command termination
    pub const CMD_STOPPED: u64 = 1 << 61;
}

/// Proprietary-mode command status codes
pub mod status {
    /// Packet transmitted successfully
    pub const PROP_DONE_OK: u16 = 0x3400;
    /// Stop received while transmitting, packet finished
    pub const PROP_DONE_STOPPED: u16 = 0x3404;
    /// Abort received while transmitting
    pub const PROP_DONE_ABORT: u16 = 0x3405;
    /// Illegal parameter
    pub const PROP_ERROR_PAR: u16 = 0x3800;
    /// Radio not set up in a supported mode
    pub const PROP_ERROR_NO_SETUP: u16 = 0x3803;
    /// Frequency synthesizer not programmed
    pub const PROP_ERROR_NO_FS: u16 = 0x3804;
    /// TX underflow during operation
    pub const PROP_ERROR_TXUNF: u16 = 0x3806;
}

/// Packet radio collaborator
///
/// The radio is opened and set up by the embedding application. All calls
/// are blocking.
pub trait Radio {
    /// Program the frequency synthesizer (fire-and-forget)
    fn set_frequency(&mut self);

    /// Transmit one frame and return the termination event mask
    fn transmit(&mut self, frame: &[u8]) -> u64;

    /// Status code of the last transmit command
    fn command_status(&mut self) -> u16;

    /// Release the radio so it can power down
    fn release(&mut self);
}

/// How the transmit command terminated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TerminationReason {
    /// Command ran to completion
    LastCmdDone,
    /// Cancelled before it started
    Cancelled,
    /// Terminated abruptly
    Aborted,
    /// Terminated gracefully
    Stopped,
}

impl TerminationReason {
    /// Classify a termination event mask, `None` when unrecognized
    #[must_use]
    pub const fn from_event_mask(mask: u64) -> Option<Self> {
        match mask {
            event::LAST_CMD_DONE => Some(Self::LastCmdDone),
            event::CMD_CANCELLED => Some(Self::Cancelled),
            event::CMD_ABORTED => Some(Self::Aborted),
            event::CMD_STOPPED => Some(Self::Stopped),
            _ => None,
        }
    }

    /// Whether the payload is considered on air
    #[must_use]
    pub const fn delivered(self) -> bool {
        matches!(self, Self::LastCmdDone)
    }
}

/// Command status reported after termination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CommandStatus {
    /// Packet transmitted successfully
    DoneOk,
    /// Stopped after the packet finished
    DoneStopped,
    /// Aborted while transmitting
    DoneAbort,
    /// Illegal parameter
    ErrorParameter,
    /// Radio not set up
    ErrorNoSetup,
    /// Synthesizer not programmed
    ErrorNoSynth,
    /// TX underflow
    ErrorTxUnderflow,
}

impl CommandStatus {
    /// Classify a status code, `None` when unrecognized
    #[must_use]
    pub const fn from_code(code: u16) -> Option<Self> {
        match code {
            status::PROP_DONE_OK => Some(Self::DoneOk),
            status::PROP_DONE_STOPPED => Some(Self::DoneStopped),
            status::PROP_DONE_ABORT => Some(Self::DoneAbort),
            status::PROP_ERROR_PAR => Some(Self::ErrorParameter),
            status::PROP_ERROR_NO_SETUP => Some(Self::ErrorNoSetup),
            status::PROP_ERROR_NO_FS => Some(Self::ErrorNoSynth),
            status::PROP_ERROR_TXUNF => Some(Self::ErrorTxUnderflow),
            _ => None,
        }
    }

    /// Whether the code is one of the `PROP_ERROR_*` values
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(
            self,
            Self::ErrorParameter | Self::ErrorNoSetup | Self::ErrorNoSynth | Self::ErrorTxUnderflow
        )
    }
}

/// Result of one [`Transmitter::send`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransmitOutcome {
    /// The command completed
    Delivered {
        /// Sequence number the packet carried
        sequence: u16,
        /// Reported command status
        status: CommandStatus,
    },
    /// The command was cancelled, aborted or stopped; the packet is dropped
    Dropped {
        /// Sequence number the packet carried
        sequence: u16,
        /// Why the command terminated
        reason: TerminationReason,
        /// Reported command status
        status: CommandStatus,
    },
}

impl TransmitOutcome {
    /// Sequence number the packet carried
    #[must_use]
    pub const fn sequence(&self) -> u16 {
        match self {
            Self::Delivered { sequence, .. } | Self::Dropped { sequence, .. } => *sequence,
        }
    }

    /// Whether the packet went out
    #[must_use]
    pub const fn is_delivered(&self) -> bool {
        matches!(self, Self::Delivered { .. })
    }
}

/// Fixed 2-byte diagnostic payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DiagnosticPing {
    /// Radio opened
    RadioReady,
    /// Register bus opened
    BusReady,
    /// Sensor configured
    Configured,
}

impl DiagnosticPing {
    /// Payload bytes
    #[must_use]
    pub const fn payload(self) -> [u8; 2] {
        match self {
            Self::RadioReady => [0xA5, 0x01],
            Self::BusReady => [0xA5, 0x02],
            Self::Configured => [0xA5, 0x03],
        }
    }
}

/// Frame `payload` behind the big-endian `sequence`
///
/// Returns `None` when the payload does not fit in [`MAX_PAYLOAD_LEN`].
#[must_use]
pub fn frame_packet(sequence: u16, payload: &[u8]) -> Option<Frame> {
    if payload.len() > MAX_PAYLOAD_LEN {
        return None;
    }
    let mut frame = Frame::new();
    frame.extend_from_slice(&sequence.to_be_bytes()).ok()?;
    frame.extend_from_slice(payload).ok()?;
    Some(frame)
}

/// Sequence-numbering packet transmitter
pub struct Transmitter<R> {
    radio: R,
    sequence: u16,
}

impl<R: Radio> Transmitter<R> {
    /// Create a transmitter starting at sequence 0
    pub const fn new(radio: R) -> Self {
        Self::with_sequence(radio, 0)
    }

    /// Create a transmitter starting at `sequence`
    pub const fn with_sequence(radio: R, sequence: u16) -> Self {
        Self { radio, sequence }
    }

    /// Sequence number the next packet will carry
    #[must_use]
    pub const fn sequence(&self) -> u16 {
        self.sequence
    }

    /// Consume the transmitter and return the radio
    pub fn release(self) -> R {
        self.radio
    }

    /// Frame and transmit one payload
    ///
    /// The sequence number advances once the payload is framed, so a dropped
    /// packet still consumes its number. The radio is released to low power
    /// after every transmit, before the outcome is classified.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPayload`] if the payload is empty or longer than
    ///   [`MAX_PAYLOAD_LEN`]; no sequence number is consumed
    /// - [`Error::RadioTermination`] for an unrecognized termination event
    /// - [`Error::RadioStatus`] for an unrecognized command status
    pub fn send<E>(&mut self, payload: &[u8]) -> Result<TransmitOutcome, Error<E>> {
        if payload.is_empty() {
            return Err(Error::InvalidPayload(0));
        }
        let frame = frame_packet(self.sequence, payload)
            .ok_or(Error::InvalidPayload(payload.len()))?;
        let sequence = self.sequence;
        self.sequence = self.sequence.wrapping_add(1);

        self.radio.set_frequency();
        let mask = self.radio.transmit(&frame);
        let code = self.radio.command_status();
        self.radio.release();

        let Some(reason) = TerminationReason::from_event_mask(mask) else {
            #[cfg(feature = "defmt")]
            defmt::error!("Uncaught radio termination event {=u64:#x}", mask);
            return Err(Error::RadioTermination(mask));
        };
        let Some(status) = CommandStatus::from_code(code) else {
            #[cfg(feature = "defmt")]
            defmt::error!("Uncaught radio status {=u16:#x}", code);
            return Err(Error::RadioStatus(code));
        };

        #[cfg(feature = "defmt")]
        if status.is_error() {
            defmt::warn!("Packet {=u16} transmit status {}", sequence, status);
        }

        if reason.delivered() {
            Ok(TransmitOutcome::Delivered { sequence, status })
        } else {
            #[cfg(feature = "defmt")]
            defmt::debug!("Packet {=u16} dropped: {}", sequence, reason);
            Ok(TransmitOutcome::Dropped {
                sequence,
                reason,
                status,
            })
        }
    }

    /// Send a diagnostic ping
    ///
    /// # Errors
    ///
    /// Same as [`Transmitter::send`].
    pub fn ping<E>(&mut self, ping: DiagnosticPing) -> Result<TransmitOutcome, Error<E>> {
        self.send(&ping.payload())
    }
}
