//! GPT (_GUID Partition Table_) header and partition entry array codecs.
//!
//! Decoding never validates: a header whose checksum is stale, or whose signature is garbage,
//! still decodes so that it can be inspected. Validity is queried afterwards through
//! [`GptHeader::is_valid`] / [`GptHeader::check_validity`].

use core::fmt;

use alloc::{string::String, vec::Vec};

use zerocopy::byteorder::little_endian::{U16, U32, U64};
use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout, Unaligned};

use crate::checksum::{calculate_partition_entry_array_crc32, crc32};
use crate::error::{Error, Result};
use crate::guid::Guid;

/// Size of the fields defined by UEFI in a GPT header.
pub const GPT_HEADER_SIZE: usize = 0x5C;

/// Size of the fields defined by UEFI in a partition entry.
pub const GPT_ENTRY_SIZE: usize = 0x80;

pub const GPT_SIG: &[u8; 8] = b"EFI PART";

/// Revision 1.0, the only one defined so far.
pub const GPT_REVISION: u32 = 0x0001_0000;

/// Number of UTF-16 code units in a partition name.
pub const GPT_NAME_LEN: usize = 36;

const HEADER_SIZE_OFFSET: usize = 12;
const HEADER_CRC_OFFSET: usize = 16;

/// Error type when checking the validity of a [`GptHeader`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GptError {
    /// The header does not start with `"EFI PART"`.
    InvalidSignature,

    /// `header_size` is smaller than the defined fields.
    InvalidHeaderSize(u32),

    /// Stored header checksum does not match (expected, found).
    InvalidHeaderChecksum(u32, u32),

    /// Stored entry array checksum does not match (expected, found).
    InvalidEntryArrayChecksum(u32, u32),
}

impl fmt::Display for GptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GptError::InvalidSignature => write!(f, "invalid GPT signature"),
            GptError::InvalidHeaderSize(size) => {
                write!(f, "GPT header size {size} is smaller than {GPT_HEADER_SIZE}")
            }
            GptError::InvalidHeaderChecksum(expected, found) => write!(
                f,
                "corrupted header CRC32 (expected {expected:#010x}, found {found:#010x})"
            ),
            GptError::InvalidEntryArrayChecksum(expected, found) => write!(
                f,
                "corrupted entry array CRC32 (expected {expected:#010x}, found {found:#010x})"
            ),
        }
    }
}

/// On-disk layout of the defined part of a GPT header.
#[derive(FromBytes, IntoBytes, KnownLayout, Immutable, Unaligned)]
#[repr(C)]
struct RawGptHeader {
    signature: [u8; 8],
    revision: U32,
    header_size: U32,
    header_crc32: U32,
    reserved: U32,
    my_lba: U64,
    alternate_lba: U64,
    first_usable_lba: U64,
    last_usable_lba: U64,
    disk_guid: Guid,
    partition_entry_lba: U64,
    number_of_partition_entries: U32,
    size_of_partition_entry: U32,
    partition_entry_array_crc32: U32,
}

assert_eq_size!(RawGptHeader, [u8; GPT_HEADER_SIZE]);
assert_eq_align!(RawGptHeader, u8);

/// A decoded GPT header.
///
/// Fields can be edited freely; checksums are never recomputed behind the caller's back.
/// After editing, call [`GptHeader::update_header_crc32`] (and
/// [`GptHeader::update_partition_entry_array_crc32`] if entries changed).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GptHeader {
    /// Identifies EFI-compatible partition table header.
    /// Should contain the string "EFI PART".
    pub signature: [u8; 8],

    /// Revision number for this header.
    pub revision: u32,

    /// Size of the header in bytes. Bounds both encoding and the header checksum.
    pub header_size: u32,

    /// CRC32 checksum for the header.
    pub header_crc32: u32,

    /// Must be zero.
    pub reserved: u32,

    /// The LBA that contains this structure.
    pub my_lba: u64,

    /// The LBA of the alternate `GPT` header.
    pub alternate_lba: u64,

    /// First logical block that may be used by a partition.
    pub first_usable_lba: u64,

    /// Last logical block that may be used by a partition.
    pub last_usable_lba: u64,

    /// GUID used to identify the disk.
    pub disk_guid: Guid,

    /// Starting LBA of the GUID Partition Entry array.
    pub partition_entry_lba: u64,

    /// Number of partitions entries in the GUID Partition Entry array.
    pub number_of_partition_entries: u32,

    /// Size in bytes of each entry in the GUID Partition Entry array.
    pub size_of_partition_entry: u32,

    /// CRC32 of the GUID Partition Entry array.
    pub partition_entry_array_crc32: u32,

    /// Bytes between the defined fields and `header_size`, kept verbatim.
    pub extra: Vec<u8>,
}

/// Decodes a GPT header.
///
/// `header_size` is read first and bounds the rest of the decode: `bytes` must hold at least
/// the 92 defined bytes and at least `header_size` bytes. Bytes past the defined fields, up
/// to `header_size`, end up in [`GptHeader::extra`].
///
/// # Errors
///
/// Returns [`Error::MalformedInput`] if `bytes` is too short.
pub fn decode_gpt_header(bytes: &[u8]) -> Result<GptHeader> {
    let size_field = bytes
        .get(HEADER_SIZE_OFFSET..HEADER_SIZE_OFFSET + 4)
        .ok_or(Error::malformed("GPT header", GPT_HEADER_SIZE, bytes.len()))?;
    let header_size =
        u32::from_le_bytes([size_field[0], size_field[1], size_field[2], size_field[3]]);

    let required = (header_size as usize).max(GPT_HEADER_SIZE);
    if bytes.len() < required {
        return Err(Error::malformed("GPT header", required, bytes.len()));
    }

    let (raw, rest) = RawGptHeader::read_from_prefix(bytes)
        .map_err(|_| Error::malformed("GPT header", GPT_HEADER_SIZE, bytes.len()))?;
    let extra = rest[..required - GPT_HEADER_SIZE].to_vec();

    log::trace!(
        "decoded GPT header: size {header_size}, {} entries of {} bytes at LBA {}",
        raw.number_of_partition_entries.get(),
        raw.size_of_partition_entry.get(),
        raw.partition_entry_lba.get()
    );

    Ok(GptHeader {
        signature: raw.signature,
        revision: raw.revision.get(),
        header_size,
        header_crc32: raw.header_crc32.get(),
        reserved: raw.reserved.get(),
        my_lba: raw.my_lba.get(),
        alternate_lba: raw.alternate_lba.get(),
        first_usable_lba: raw.first_usable_lba.get(),
        last_usable_lba: raw.last_usable_lba.get(),
        disk_guid: raw.disk_guid,
        partition_entry_lba: raw.partition_entry_lba.get(),
        number_of_partition_entries: raw.number_of_partition_entries.get(),
        size_of_partition_entry: raw.size_of_partition_entry.get(),
        partition_entry_array_crc32: raw.partition_entry_array_crc32.get(),
        extra,
    })
}

/// Encodes a GPT header to exactly `header_size` bytes.
///
/// This is a pure serializer: checksums are written as stored. If `header_size` is larger than
/// the defined fields plus [`GptHeader::extra`], the output is zero-padded; if smaller, it is
/// truncated.
#[must_use]
pub fn encode_gpt_header(header: &GptHeader) -> Vec<u8> {
    let raw = RawGptHeader {
        signature: header.signature,
        revision: U32::new(header.revision),
        header_size: U32::new(header.header_size),
        header_crc32: U32::new(header.header_crc32),
        reserved: U32::new(header.reserved),
        my_lba: U64::new(header.my_lba),
        alternate_lba: U64::new(header.alternate_lba),
        first_usable_lba: U64::new(header.first_usable_lba),
        last_usable_lba: U64::new(header.last_usable_lba),
        disk_guid: header.disk_guid,
        partition_entry_lba: U64::new(header.partition_entry_lba),
        number_of_partition_entries: U32::new(header.number_of_partition_entries),
        size_of_partition_entry: U32::new(header.size_of_partition_entry),
        partition_entry_array_crc32: U32::new(header.partition_entry_array_crc32),
    };

    let mut buf = Vec::with_capacity(GPT_HEADER_SIZE + header.extra.len());
    buf.extend_from_slice(raw.as_bytes());
    buf.extend_from_slice(&header.extra);
    buf.resize(header.header_size as usize, 0);

    log::trace!("encoded GPT header ({} bytes)", buf.len());

    buf
}

impl GptHeader {
    /// Computes the header checksum: CRC32 over the first `header_size` encoded bytes, with the
    /// checksum field itself zeroed.
    #[must_use]
    pub fn calculate_header_crc32(&self) -> u32 {
        let mut buf = encode_gpt_header(self);
        if let Some(field) = buf.get_mut(HEADER_CRC_OFFSET..HEADER_CRC_OFFSET + 4) {
            field.fill(0);
        }

        crc32(&buf)
    }

    /// Recomputes and stores the header checksum.
    pub fn update_header_crc32(&mut self) {
        let previous = self.header_crc32;
        self.header_crc32 = self.calculate_header_crc32();

        log::debug!(
            "header CRC32 {previous:#010x} -> {:#010x}",
            self.header_crc32
        );
    }

    /// Recomputes and stores the entry array checksum from the encoded array.
    pub fn update_partition_entry_array_crc32(&mut self, entries: &[u8]) {
        let previous = self.partition_entry_array_crc32;
        self.partition_entry_array_crc32 = calculate_partition_entry_array_crc32(entries);

        log::debug!(
            "entry array CRC32 {previous:#010x} -> {:#010x}",
            self.partition_entry_array_crc32
        );
    }

    /// Returns `true` if the signature is `"EFI PART"`, `header_size` covers the defined fields
    /// and the stored header checksum matches.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.check_validity().is_ok()
    }

    /// Checks the signature, the header size and the header checksum.
    pub fn check_validity(&self) -> Result<(), GptError> {
        if &self.signature != GPT_SIG {
            return Err(GptError::InvalidSignature);
        }

        if (self.header_size as usize) < GPT_HEADER_SIZE {
            return Err(GptError::InvalidHeaderSize(self.header_size));
        }

        let expected_checksum = self.calculate_header_crc32();

        if expected_checksum != self.header_crc32 {
            return Err(GptError::InvalidHeaderChecksum(
                expected_checksum,
                self.header_crc32,
            ));
        }

        Ok(())
    }

    /// Checks `entries` (the encoded array) against the stored entry array checksum.
    pub fn verify_partition_entry_array(&self, entries: &[u8]) -> Result<(), GptError> {
        let expected = calculate_partition_entry_array_crc32(entries);

        if expected != self.partition_entry_array_crc32 {
            return Err(GptError::InvalidEntryArrayChecksum(
                expected,
                self.partition_entry_array_crc32,
            ));
        }

        Ok(())
    }

    /// Size in bytes of the partition entry array described by this header.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleFormat`] if the size does not fit in memory.
    pub fn entries_byte_len(&self) -> Result<usize> {
        array_len(self.size_of_partition_entry, self.number_of_partition_entries)
    }
}

fn array_len(entry_size: u32, count: u32) -> Result<usize> {
    (entry_size as usize)
        .checked_mul(count as usize)
        .ok_or(Error::IncompatibleFormat(
            "partition entry array does not fit in memory",
        ))
}

/// On-disk layout of the defined part of a partition entry.
#[derive(FromBytes, IntoBytes, KnownLayout, Immutable, Unaligned)]
#[repr(C)]
struct RawGptPartitionEntry {
    partition_type_guid: Guid,
    unique_partition_guid: Guid,
    starting_lba: U64,
    ending_lba: U64,
    attributes: U64,
    partition_name: [U16; GPT_NAME_LEN],
}

assert_eq_size!(RawGptPartitionEntry, [u8; GPT_ENTRY_SIZE]);
assert_eq_align!(RawGptPartitionEntry, u8);

/// One slot of the partition entry array.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GptPartitionEntry {
    /// Defines the purpose and type of this partition. All-zero marks an unused slot.
    pub partition_type_guid: Guid,

    /// GUID unique for every partition entry.
    pub unique_partition_guid: Guid,

    /// Starting LBA of this partition.
    pub starting_lba: u64,

    /// Last LBA of this partition (inclusive).
    pub ending_lba: u64,

    /// Partition's attributes bits.
    pub attributes: u64,

    /// UTF-16LE name, NUL-padded.
    pub partition_name: [u16; GPT_NAME_LEN],

    /// Bytes past the 128 defined ones when the entry size is larger, kept verbatim.
    pub opaque_tail: Vec<u8>,
}

impl Default for GptPartitionEntry {
    fn default() -> Self {
        Self {
            partition_type_guid: Guid::UNUSED,
            unique_partition_guid: Guid::UNUSED,
            starting_lba: 0,
            ending_lba: 0,
            attributes: 0,
            partition_name: [0u16; GPT_NAME_LEN],
            opaque_tail: Vec::new(),
        }
    }
}

impl GptPartitionEntry {
    /// Builds an entry with no opaque tail; `name` is encoded as with [`Self::set_name`].
    #[must_use]
    pub fn new(
        partition_type_guid: Guid,
        unique_partition_guid: Guid,
        starting_lba: u64,
        ending_lba: u64,
        attributes: u64,
        name: &str,
    ) -> Self {
        let mut entry = Self {
            partition_type_guid,
            unique_partition_guid,
            starting_lba,
            ending_lba,
            attributes,
            ..Self::default()
        };
        entry.set_name(name);

        entry
    }

    /// Returns this partition's sectors count.
    ///
    /// An empty or inverted range counts as zero; a range spanning every LBA saturates at
    /// `u64::MAX`.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.ending_lba
            .checked_sub(self.starting_lba)
            .map_or(0, |len| len.saturating_add(1))
    }

    #[must_use]
    pub fn is_used(&self) -> bool {
        !self.partition_type_guid.is_zero()
    }

    /// Decodes the partition name, up to the first NUL code unit.
    ///
    /// Returns `None` if the name is not valid UTF-16.
    #[must_use]
    pub fn name(&self) -> Option<String> {
        let len = self
            .partition_name
            .iter()
            .position(|&c| c == 0)
            .unwrap_or(GPT_NAME_LEN);

        String::from_utf16(&self.partition_name[..len]).ok()
    }

    /// Encodes `name` as UTF-16, truncated to 36 code units and NUL-padded.
    pub fn set_name(&mut self, name: &str) {
        self.partition_name = [0u16; GPT_NAME_LEN];
        for (slot, c) in self.partition_name.iter_mut().zip(name.encode_utf16()) {
            *slot = c;
        }
    }

    fn from_slot(slot: &[u8]) -> Result<Self> {
        let (raw, tail) = RawGptPartitionEntry::read_from_prefix(slot)
            .map_err(|_| Error::malformed("GPT partition entry", GPT_ENTRY_SIZE, slot.len()))?;

        Ok(Self {
            partition_type_guid: raw.partition_type_guid,
            unique_partition_guid: raw.unique_partition_guid,
            starting_lba: raw.starting_lba.get(),
            ending_lba: raw.ending_lba.get(),
            attributes: raw.attributes.get(),
            partition_name: raw.partition_name.map(|c| c.get()),
            opaque_tail: tail.to_vec(),
        })
    }

    fn write_slot(&self, out: &mut Vec<u8>, entry_size: usize) -> Result<()> {
        let tail_len = entry_size - GPT_ENTRY_SIZE;
        if self.opaque_tail.len() > tail_len {
            return Err(Error::malformed(
                "GPT partition entry",
                entry_size,
                GPT_ENTRY_SIZE + self.opaque_tail.len(),
            ));
        }

        let raw = RawGptPartitionEntry {
            partition_type_guid: self.partition_type_guid,
            unique_partition_guid: self.unique_partition_guid,
            starting_lba: U64::new(self.starting_lba),
            ending_lba: U64::new(self.ending_lba),
            attributes: U64::new(self.attributes),
            partition_name: self.partition_name.map(U16::new),
        };

        out.extend_from_slice(raw.as_bytes());
        out.extend_from_slice(&self.opaque_tail);
        out.resize(out.len() + tail_len - self.opaque_tail.len(), 0);

        Ok(())
    }
}

/// Decodes `count` consecutive entries of `entry_size` bytes each.
///
/// Only the first `entry_size * count` bytes of `bytes` are used. Slot order is preserved:
/// index `i` of the result is slot `i` of the array, unused slots included.
///
/// # Errors
///
/// Returns [`Error::MalformedInput`] if `entry_size` is smaller than 128 bytes or `bytes` is
/// shorter than `entry_size * count`.
pub fn decode_gpt_partition_entry_array(
    bytes: &[u8],
    entry_size: u32,
    count: u32,
) -> Result<Vec<GptPartitionEntry>> {
    let entry_size_bytes = entry_size as usize;
    if entry_size_bytes < GPT_ENTRY_SIZE {
        return Err(Error::malformed(
            "GPT partition entry",
            GPT_ENTRY_SIZE,
            entry_size_bytes,
        ));
    }

    let len = array_len(entry_size, count)?;
    let array = bytes
        .get(..len)
        .ok_or(Error::malformed("GPT partition entry array", len, bytes.len()))?;

    let entries = array
        .chunks_exact(entry_size_bytes)
        .map(GptPartitionEntry::from_slot)
        .collect::<Result<Vec<_>>>()?;

    log::trace!(
        "decoded {} GPT entries ({} used)",
        entries.len(),
        entries.iter().filter(|e| e.is_used()).count()
    );

    Ok(entries)
}

/// Encodes `entries` into a packed array of exactly `entry_size * count` bytes.
///
/// Entries whose [`GptPartitionEntry::opaque_tail`] is shorter than `entry_size - 128` are
/// zero-padded.
///
/// # Errors
///
/// Returns [`Error::MalformedInput`] if `entries.len() != count`, if `entry_size` is smaller
/// than 128 bytes, or if an entry's opaque tail does not fit in `entry_size`.
pub fn encode_gpt_partition_entry_array(
    entries: &[GptPartitionEntry],
    entry_size: u32,
    count: u32,
) -> Result<Vec<u8>> {
    if entries.len() != count as usize {
        return Err(Error::malformed(
            "GPT partition entry list",
            count as usize,
            entries.len(),
        ));
    }

    let entry_size_bytes = entry_size as usize;
    if entry_size_bytes < GPT_ENTRY_SIZE {
        return Err(Error::malformed(
            "GPT partition entry",
            GPT_ENTRY_SIZE,
            entry_size_bytes,
        ));
    }

    let mut buf = Vec::with_capacity(array_len(entry_size, count)?);
    for entry in entries {
        entry.write_slot(&mut buf, entry_size_bytes)?;
    }

    log::trace!("encoded {} GPT entries ({} bytes)", entries.len(), buf.len());

    Ok(buf)
}
