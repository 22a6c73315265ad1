//! MBR (_Master Boot Record_) partition table handling
//!
//! Legacy structure stored on the first logical block of the drive. On a GPT disk it is a
//! _protective_ MBR: a single record of type `0xEE` covering the whole disk, so that legacy tools
//! see the disk as fully allocated.
//!
//! The codec is a straight byte mapping: every byte of the 512-byte sector, including bootstrap
//! code and CHS fields, survives a decode/encode cycle untouched.

use core::ops::{Deref, DerefMut};

use zerocopy::byteorder::little_endian::U32;
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

use crate::error::{Error, Result};

/// Size of an encoded MBR, in bytes.
pub const MBR_SIZE: usize = 0x200;

/// Size of the bootstrap area, in bytes.
///
/// This includes the optional 4-byte disk signature at offset 440 and the 2 reserved bytes
/// that follow it.
pub const MBR_BOOTSTRAP_SIZE: usize = 446;

/// Offset of the optional disk signature inside the bootstrap area.
pub const MBR_DISK_SIGNATURE_OFFSET: usize = 440;

/// Boot signature, as found at offset 510.
pub const MBR_MAGIC: [u8; 2] = [0x55, 0xAA];

/// Partition type of the protective record on a GPT disk.
pub const MBR_PROTECTIVE_TYPE: u8 = 0xEE;

/// Decodes a protective MBR from exactly [`MBR_SIZE`] bytes.
///
/// No validity check happens here; see [`Mbr::is_valid`].
///
/// # Errors
///
/// Returns [`Error::MalformedInput`] if `bytes` is not exactly 512 bytes long.
pub fn decode_mbr(bytes: &[u8]) -> Result<Mbr> {
    let mbr =
        Mbr::read_from_bytes(bytes).map_err(|_| Error::malformed("MBR", MBR_SIZE, bytes.len()))?;

    log::trace!("decoded MBR, signature {:02x?}", mbr.boot_sig);

    Ok(mbr)
}

/// Encodes an MBR back to its 512-byte on-disk form.
#[must_use]
pub fn encode_mbr(mbr: &Mbr) -> [u8; MBR_SIZE] {
    let mut buf = [0u8; MBR_SIZE];
    buf.copy_from_slice(mbr.as_bytes());

    buf
}

/// The Master Boot Record is the first sector of a storage device that
/// contains bootstrap code, a partition table, and a boot signature.
///
/// # Examples
///
/// ```
/// use gptkit::mbr::{decode_mbr, encode_mbr, Mbr};
///
/// let mbr = Mbr::new_protective(0x10_0000);
/// assert!(mbr.is_valid());
/// assert!(mbr.is_protective());
///
/// let bytes = encode_mbr(&mbr);
/// assert_eq!(decode_mbr(&bytes).unwrap(), mbr);
/// ```
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, FromBytes, IntoBytes, KnownLayout, Immutable, Unaligned,
)]
#[repr(C)]
pub struct Mbr {
    bootstrap: [u8; MBR_BOOTSTRAP_SIZE],

    /// Partition table for this `Mbr`.
    ///
    /// The partition table contains entries describing up to four primary partitions.
    pub partitions: [MbrPartition; 4],

    boot_sig: [u8; 2],
}

assert_eq_size!(Mbr, [u8; MBR_SIZE]);
assert_eq_align!(Mbr, u8);

/// Error type when checking the validity of an [`Mbr`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MbrError {
    /// The signature field in this [`Mbr`] is not `0x55 0xAA`.
    InvalidSignature,

    /// The [`Mbr`] does not hold exactly one protective (`0xEE`) record starting at LBA 1.
    NotProtective,
}

impl Mbr {
    /// Creates a new, empty (but valid) MBR.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bootstrap: [0u8; MBR_BOOTSTRAP_SIZE],
            partitions: [MbrPartition::default(); 4],
            boot_sig: MBR_MAGIC,
        }
    }

    /// Creates a protective MBR for a disk of `total_sectors` logical blocks.
    ///
    /// The protective record starts at LBA 1 and spans the rest of the disk, clamped to
    /// `0xFFFFFFFF` sectors for disks too large to be described by a 32-bit count.
    #[must_use]
    pub fn new_protective(total_sectors: u64) -> Self {
        let mut mbr = Self::new();
        let sectors = u32::try_from(total_sectors.saturating_sub(1)).unwrap_or(u32::MAX);

        mbr.partitions[0] = MbrPartition {
            attributes: 0,
            chs_start: [0x00, 0x02, 0x00],
            part_type: MBR_PROTECTIVE_TYPE,
            chs_last: [0xFF, 0xFF, 0xFF],
            start_lba: U32::new(1),
            sectors_count: U32::new(sectors),
        };

        mbr
    }

    /// Returns the bootstrap area of this MBR, disk signature included.
    #[must_use]
    pub fn bootcode(&self) -> &[u8] {
        &self.bootstrap
    }

    /// Replaces the bootstrap code in this MBR.
    ///
    /// The remaining bytes of the bootstrap area are zeroed.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedInput`] if `bootcode` is longer than [`MBR_BOOTSTRAP_SIZE`].
    pub fn update_bootcode(&mut self, bootcode: &[u8]) -> Result<()> {
        if bootcode.len() > MBR_BOOTSTRAP_SIZE {
            return Err(Error::malformed(
                "MBR bootcode",
                MBR_BOOTSTRAP_SIZE,
                bootcode.len(),
            ));
        }

        self.bootstrap.fill(0);
        self.bootstrap[..bootcode.len()].copy_from_slice(bootcode);

        Ok(())
    }

    /// Returns the optional 32-bit disk signature stored at offset 440.
    #[must_use]
    pub fn disk_signature(&self) -> u32 {
        let off = MBR_DISK_SIGNATURE_OFFSET;

        u32::from_le_bytes([
            self.bootstrap[off],
            self.bootstrap[off + 1],
            self.bootstrap[off + 2],
            self.bootstrap[off + 3],
        ])
    }

    /// Returns the two bytes at offset 510.
    #[must_use]
    pub fn boot_signature(&self) -> [u8; 2] {
        self.boot_sig
    }

    /// Returns `true` if the boot signature is `0x55 0xAA`.
    ///
    /// The protective record is not required; use [`Mbr::is_protective`] for that.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.check_validity().is_ok()
    }

    /// Checks if this MBR is valid.
    ///
    /// Returns an error describing what is wrong if it's not a valid MBR.
    pub fn check_validity(&self) -> Result<(), MbrError> {
        if self.boot_sig != MBR_MAGIC {
            return Err(MbrError::InvalidSignature);
        }

        Ok(())
    }

    /// Checks that this MBR is a valid protective MBR: correct signature, and exactly one
    /// `0xEE` record, starting at LBA 1 and spanning a non-empty range.
    pub fn check_protective(&self) -> Result<(), MbrError> {
        self.check_validity()?;

        let mut protective = self
            .partitions
            .iter()
            .filter(|part| part.part_type == MBR_PROTECTIVE_TYPE);

        match (protective.next(), protective.next()) {
            (Some(part), None) if part.start_lba() == 1 && part.sectors_count() != 0 => Ok(()),
            _ => Err(MbrError::NotProtective),
        }
    }

    /// Returns `true` if [`Mbr::check_protective`] passes.
    #[must_use]
    pub fn is_protective(&self) -> bool {
        self.check_protective().is_ok()
    }
}

impl Default for Mbr {
    fn default() -> Self {
        Self::new()
    }
}

/// Mutable view of an [`Mbr`] living inside a caller-owned buffer.
///
/// Edits made through the view are written straight into the buffer.
pub struct MbrInplace<'a> {
    mbr: &'a mut Mbr,
}

impl<'a> MbrInplace<'a> {
    /// Creates an `MbrInplace` over the first [`MBR_SIZE`] bytes of `buf`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedInput`] if `buf` is shorter than 512 bytes.
    pub fn from_buf(buf: &'a mut [u8]) -> Result<Self> {
        let len = buf.len();
        let sector = buf
            .get_mut(..MBR_SIZE)
            .ok_or(Error::malformed("MBR", MBR_SIZE, len))?;
        let mbr =
            Mbr::mut_from_bytes(sector).map_err(|_| Error::malformed("MBR", MBR_SIZE, len))?;

        Ok(MbrInplace { mbr })
    }
}

impl Deref for MbrInplace<'_> {
    type Target = Mbr;

    fn deref(&self) -> &Self::Target {
        self.mbr
    }
}

impl DerefMut for MbrInplace<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.mbr
    }
}

/// Represents an individual 16-byte partition record in an MBR partition table.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    FromBytes,
    IntoBytes,
    KnownLayout,
    Immutable,
    Unaligned,
)]
#[repr(C)]
pub struct MbrPartition {
    attributes: u8,

    chs_start: [u8; 3],
    part_type: u8,
    chs_last: [u8; 3],

    start_lba: U32,
    sectors_count: U32,
}

assert_eq_size!(MbrPartition, [u8; 16]);

impl MbrPartition {
    /// Returns `true` if this partition is flagged as _active_ (or bootable).
    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.attributes & 0x80 != 0
    }

    /// Sets the _active_ (or bootable) flag for this partition.
    #[inline]
    pub fn set_active(&mut self, active: bool) {
        self.attributes = if active { 0x80 } else { 0 }
    }

    /// Returns `true` if this entry describes a partition.
    #[must_use]
    pub fn is_used(&self) -> bool {
        self.part_type != 0 && self.sectors_count() != 0
    }

    /// Returns the size of this partition, in sectors.
    #[inline]
    #[must_use]
    pub fn sectors_count(&self) -> u32 {
        self.sectors_count.get()
    }

    #[inline]
    pub fn set_sectors_count(&mut self, count: u32) {
        self.sectors_count.set(count);
    }

    /// Returns this partition's starting LBA.
    #[inline]
    #[must_use]
    pub fn start_lba(&self) -> u32 {
        self.start_lba.get()
    }

    #[inline]
    pub fn set_start_lba(&mut self, lba: u32) {
        self.start_lba.set(lba);
    }

    /// Raw CHS address of the first sector.
    #[must_use]
    pub fn chs_start(&self) -> [u8; 3] {
        self.chs_start
    }

    /// Raw CHS address of the last sector.
    #[must_use]
    pub fn chs_last(&self) -> [u8; 3] {
        self.chs_last
    }

    /// Returns the [`MbrPartitionType`] for this partition.
    #[inline]
    #[must_use]
    pub fn partition_type(&self) -> MbrPartitionType {
        self.part_type.into()
    }

    #[inline]
    pub fn set_partition_type(&mut self, part_type: MbrPartitionType) {
        self.part_type = part_type.into();
    }
}

/// Partition IDs found in MBR records.
///
/// Unlisted IDs are kept as [`MbrPartitionType::Other`] so that the raw value round-trips.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MbrPartitionType {
    Empty,
    Fat12,
    Fat16,
    Extended,
    NtfsOrExfat,
    Fat32,
    Fat32Lba,
    ExtendedLba,
    LinuxSwap,
    LinuxNative,
    LinuxLvm,
    GptProtective,
    EfiSystem,
    Other(u8),
}

impl From<MbrPartitionType> for u8 {
    fn from(value: MbrPartitionType) -> Self {
        match value {
            MbrPartitionType::Empty => 0,
            MbrPartitionType::Fat12 => 0x01,
            MbrPartitionType::Fat16 => 0x06,
            MbrPartitionType::Extended => 0x05,
            MbrPartitionType::NtfsOrExfat => 0x07,
            MbrPartitionType::Fat32 => 0x0B,
            MbrPartitionType::Fat32Lba => 0x0C,
            MbrPartitionType::ExtendedLba => 0x0F,
            MbrPartitionType::LinuxSwap => 0x82,
            MbrPartitionType::LinuxNative => 0x83,
            MbrPartitionType::LinuxLvm => 0x8E,
            MbrPartitionType::GptProtective => MBR_PROTECTIVE_TYPE,
            MbrPartitionType::EfiSystem => 0xEF,
            MbrPartitionType::Other(id) => id,
        }
    }
}

impl From<u8> for MbrPartitionType {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Empty,
            0x01 => Self::Fat12,
            0x06 => Self::Fat16,
            0x05 => Self::Extended,
            0x07 => Self::NtfsOrExfat,
            0x0B => Self::Fat32,
            0x0C => Self::Fat32Lba,
            0x0F => Self::ExtendedLba,
            0x82 => Self::LinuxSwap,
            0x83 => Self::LinuxNative,
            0x8E => Self::LinuxLvm,
            MBR_PROTECTIVE_TYPE => Self::GptProtective,
            0xEF => Self::EfiSystem,
            id => Self::Other(id),
        }
    }
}
