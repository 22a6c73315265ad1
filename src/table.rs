//! Whole partition tables: protective MBR, primary GPT header and partition entry array, laid
//! out in a disk image of `S`-byte logical blocks.
//!
//! Only the primary header is handled; the backup header at the end of the disk is left alone.

use core::ops::Range;

use alloc::{vec, vec::Vec};

use crate::error::{Error, Result};
use crate::gpt::{
    decode_gpt_header, decode_gpt_partition_entry_array, encode_gpt_header,
    encode_gpt_partition_entry_array, GptHeader, GptPartitionEntry, GPT_HEADER_SIZE, GPT_SIG,
};
use crate::mbr::{decode_mbr, encode_mbr, Mbr, MBR_SIZE};

/// Logical block size assumed when none is given.
pub const DEFAULT_SECTOR_SIZE: usize = 0x200;

/// A decoded partition table, for a disk with `S`-byte logical blocks.
///
/// `entries` holds every slot of the array, unused ones included, in slot order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartitionTable<const S: usize = DEFAULT_SECTOR_SIZE> {
    /// Protective MBR from block 0.
    pub mbr: Mbr,

    /// Primary GPT header from block 1.
    pub header: GptHeader,

    /// Every slot of the partition entry array.
    pub entries: Vec<GptPartitionEntry>,
}

/// Byte range of the entry array described by `header` in a disk image.
fn entries_range<const S: usize>(header: &GptHeader) -> Result<Range<usize>> {
    let start = header
        .partition_entry_lba
        .checked_mul(S as u64)
        .and_then(|off| usize::try_from(off).ok())
        .ok_or(Error::IncompatibleFormat(
            "partition entry array offset does not fit in memory",
        ))?;
    let end = start
        .checked_add(header.entries_byte_len()?)
        .ok_or(Error::IncompatibleFormat(
            "partition entry array end does not fit in memory",
        ))?;

    Ok(start..end)
}

fn check_block_size<const S: usize>() -> Result<()> {
    if S < MBR_SIZE {
        return Err(Error::IncompatibleFormat(
            "logical block size is smaller than an MBR",
        ));
    }

    Ok(())
}

impl<const S: usize> PartitionTable<S> {
    /// Decodes a partition table from the start of a disk image.
    ///
    /// The image must extend at least to the end of the entry array. Nothing is validated; see
    /// [`PartitionTable::is_valid`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedInput`] if the image is too short for any of the three parts,
    /// and [`Error::IncompatibleFormat`] if `S` is smaller than 512 bytes.
    pub fn decode(image: &[u8]) -> Result<Self> {
        check_block_size::<S>()?;

        let mbr_sector = image
            .get(..MBR_SIZE)
            .ok_or(Error::malformed("disk image", MBR_SIZE, image.len()))?;
        let mbr = decode_mbr(mbr_sector)?;

        let header_sector = image
            .get(S..2 * S)
            .ok_or(Error::malformed("disk image", 2 * S, image.len()))?;
        let header = decode_gpt_header(header_sector)?;

        let range = entries_range::<S>(&header)?;
        let array = image
            .get(range.clone())
            .ok_or(Error::malformed("disk image", range.end, image.len()))?;
        let entries = decode_gpt_partition_entry_array(
            array,
            header.size_of_partition_entry,
            header.number_of_partition_entries,
        )?;

        log::debug!(
            "decoded partition table: disk {}, entries at {:#x}..{:#x}",
            header.disk_guid,
            range.start,
            range.end
        );

        Ok(Self {
            mbr,
            header,
            entries,
        })
    }

    /// Byte range of the entry array in the disk image, from the header's geometry.
    pub fn entries_range(&self) -> Result<Range<usize>> {
        entries_range::<S>(&self.header)
    }

    /// Encodes the entry array with the header's entry size and count.
    pub fn encode_entries(&self) -> Result<Vec<u8>> {
        encode_gpt_partition_entry_array(
            &self.entries,
            self.header.size_of_partition_entry,
            self.header.number_of_partition_entries,
        )
    }

    /// Encodes the table into a disk image.
    ///
    /// The image holds the MBR in block 0, the header in block 1 (zero-padded past
    /// `header_size`), and the entry array at `partition_entry_lba * S`. Gaps are zeroed. The
    /// image ends at the end of the entry array, or after block 1 if that is further.
    ///
    /// Checksums are written as stored; call [`PartitionTable::update_checksums`] first after
    /// editing.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncompatibleFormat`] if the header does not fit in a block or if the
    /// entry array would overlap the first two blocks, and [`Error::MalformedInput`] if the
    /// entries do not match the header's geometry.
    pub fn encode(&self) -> Result<Vec<u8>> {
        check_block_size::<S>()?;

        let header_size = self.header.header_size as usize;
        if header_size > S {
            return Err(Error::IncompatibleFormat(
                "GPT header is larger than a logical block",
            ));
        }

        let range = self.entries_range()?;
        if !range.is_empty() && range.start < 2 * S {
            return Err(Error::IncompatibleFormat(
                "partition entry array overlaps the MBR or GPT header",
            ));
        }

        let entries = self.encode_entries()?;

        let mut image = vec![0u8; range.end.max(2 * S)];
        image[..MBR_SIZE].copy_from_slice(&encode_mbr(&self.mbr));
        image[S..S + header_size].copy_from_slice(&encode_gpt_header(&self.header));
        image[range].copy_from_slice(&entries);

        log::debug!("encoded partition table ({} bytes)", image.len());

        Ok(image)
    }

    /// Recomputes both checksums of the header from the current entries.
    ///
    /// # Errors
    ///
    /// Propagates encoding errors, and returns [`Error::InternalError`] if the header is still
    /// not valid afterwards.
    pub fn update_checksums(&mut self) -> Result<()> {
        let raw = self.encode_entries()?;

        self.header.update_partition_entry_array_crc32(&raw);
        self.header.update_header_crc32();

        if !self.header.is_valid() {
            return Err(Error::InternalError(
                "GPT header is invalid after checksum recomputation",
            ));
        }

        Ok(())
    }

    /// Returns `true` if the MBR signature, the header and the entry array checksum are all
    /// valid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        if let Err(err) = self.mbr.check_validity() {
            log::debug!("invalid MBR: {err:?}");
            return false;
        }

        if let Err(err) = self.header.check_validity() {
            log::debug!("invalid GPT header: {err}");
            return false;
        }

        match self.encode_entries() {
            Ok(raw) => match self.header.verify_partition_entry_array(&raw) {
                Ok(()) => true,
                Err(err) => {
                    log::debug!("invalid GPT entries: {err}");
                    false
                }
            },
            Err(err) => {
                log::debug!("GPT entries cannot be encoded: {err}");
                false
            }
        }
    }

    /// Iterates over used partitions, skipping unused slots.
    pub fn iter_partitions(&self) -> impl Iterator<Item = &GptPartitionEntry> {
        self.entries.iter().filter(|part| part.is_used())
    }

    /// Returns the `part_id`-th used partition.
    #[must_use]
    pub fn get_partition(&self, part_id: usize) -> Option<&GptPartitionEntry> {
        self.iter_partitions().nth(part_id)
    }

    /// Stores `new_part` in the first unused slot, then updates checksums.
    ///
    /// Returns the slot index.
    pub fn append_partition(&mut self, new_part: GptPartitionEntry) -> Result<usize> {
        let slot = self
            .entries
            .iter()
            .position(|part| !part.is_used())
            .ok_or(Error::TableFull)?;

        self.entries[slot] = new_part;
        self.update_checksums()?;

        Ok(slot)
    }

    /// Replaces the `part_id`-th used partition, then updates checksums.
    pub fn update_partition(&mut self, part_id: usize, new_part: GptPartitionEntry) -> Result<()> {
        let slot = self.used_slot(part_id)?;

        self.entries[slot] = new_part;
        self.update_checksums()
    }

    /// Clears the slot of the `part_id`-th used partition, then updates checksums.
    pub fn remove_partition(&mut self, part_id: usize) -> Result<()> {
        let slot = self.used_slot(part_id)?;

        self.entries[slot] = GptPartitionEntry::default();
        self.update_checksums()
    }

    fn used_slot(&self, part_id: usize) -> Result<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, part)| part.is_used())
            .nth(part_id)
            .map(|(slot, _)| slot)
            .ok_or(Error::NoSuchPartition(part_id))
    }
}

/// Which table supplies the MBR of a merged table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MbrSource {
    /// The table whose header and remaining entries are kept.
    #[default]
    Base,

    /// The table the copied slots come from.
    Donor,
}

/// Options for [`merge`].
///
/// # Examples
///
/// ```
/// use gptkit::{MbrSource, MergeConfig};
///
/// let cfg = MergeConfig::new().slots(0..4).mbr_source(MbrSource::Donor);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergeConfig {
    /// Slots taken from the donor.
    slots: Range<usize>,
    mbr_source: MbrSource,
    /// Whether the selected MBR must be a protective MBR.
    require_protective_mbr: bool,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            slots: 0..4,
            mbr_source: MbrSource::Base,
            require_protective_mbr: false,
        }
    }
}

impl MergeConfig {
    /// Create a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        MergeConfig::default()
    }

    /// Contiguous range of entry slots copied from the donor.
    #[must_use]
    pub fn slots(self, slots: Range<usize>) -> Self {
        let mut cfg = self;
        cfg.slots = slots;
        cfg
    }

    #[must_use]
    pub fn mbr_source(self, mbr_source: MbrSource) -> Self {
        let mut cfg = self;
        cfg.mbr_source = mbr_source;
        cfg
    }

    #[must_use]
    pub fn require_protective_mbr(self, require: bool) -> Self {
        let mut cfg = self;
        cfg.require_protective_mbr = require;
        cfg
    }
}

/// Merges two partition tables.
///
/// The result keeps `base`'s header (disk GUID, geometry, entry array location) and entries,
/// except for the slots in `cfg.slots`, which are taken from `donor` at the same indices. Both
/// checksums are then recomputed.
///
/// # Errors
///
/// Returns [`Error::IncompatibleFormat`] if the entry sizes or entry array lengths differ, if
/// the slot range is out of bounds, if `base` is not a GPT header, or if a protective MBR is
/// required and the selected one is not. Codec errors are propagated unchanged, and
/// [`Error::InternalError`] is returned if the recomputed header does not validate.
pub fn merge<const S: usize>(
    base: &PartitionTable<S>,
    donor: &PartitionTable<S>,
    cfg: &MergeConfig,
) -> Result<PartitionTable<S>> {
    if &base.header.signature != GPT_SIG {
        return Err(Error::IncompatibleFormat("base table has no GPT signature"));
    }

    if (base.header.header_size as usize) < GPT_HEADER_SIZE {
        return Err(Error::IncompatibleFormat(
            "base GPT header is smaller than its defined fields",
        ));
    }

    if base.header.size_of_partition_entry != donor.header.size_of_partition_entry {
        return Err(Error::IncompatibleFormat("partition entry sizes differ"));
    }

    if base.header.entries_byte_len()? != donor.header.entries_byte_len()? {
        return Err(Error::IncompatibleFormat(
            "partition entry array lengths differ",
        ));
    }

    if !donor.header.is_valid() {
        log::warn!("donor GPT header is not valid, merging its entries anyway");
    }

    let slots = cfg.slots.clone();
    let donor_entries = donor
        .entries
        .get(slots.clone())
        .ok_or(Error::IncompatibleFormat("slot range is out of bounds"))?;

    let mbr = match cfg.mbr_source {
        MbrSource::Base => base.mbr,
        MbrSource::Donor => donor.mbr,
    };
    if cfg.require_protective_mbr && !mbr.is_protective() {
        return Err(Error::IncompatibleFormat("selected MBR is not protective"));
    }

    let mut merged = PartitionTable {
        mbr,
        header: base.header.clone(),
        entries: base.entries.clone(),
    };

    merged
        .entries
        .get_mut(slots.clone())
        .ok_or(Error::IncompatibleFormat("slot range is out of bounds"))?
        .clone_from_slice(donor_entries);

    log::debug!(
        "merging slots {}..{} into disk {}",
        slots.start,
        slots.end,
        merged.header.disk_guid
    );

    merged.update_checksums()?;

    Ok(merged)
}
