//! Bit-exact codecs for protective MBR and GPT partition tables.
//!
//! Every structure decodes from raw sector bytes into plain values and encodes back into the
//! exact same bytes. Checksums are never recomputed implicitly: after editing a header or its
//! entries, recompute them explicitly (see [`GptHeader::update_header_crc32`] or
//! [`PartitionTable::update_checksums`]).
//!
//! ```
//! use gptkit::{merge, MbrSource, MergeConfig, PartitionTable};
//!
//! fn merge_images(base: &[u8], donor: &[u8]) -> Result<Vec<u8>, gptkit::Error> {
//!     let base: PartitionTable = PartitionTable::decode(base)?;
//!     let donor = PartitionTable::decode(donor)?;
//!
//!     let cfg = MergeConfig::new().slots(0..4).mbr_source(MbrSource::Donor);
//!     merge(&base, &donor, &cfg)?.encode()
//! }
//! ```

#![no_std]

#[macro_use]
extern crate static_assertions;

extern crate alloc;

mod checksum;
mod error;
pub mod gpt;
mod guid;
pub mod mbr;
mod table;

#[cfg(test)]
mod test_data;

pub use checksum::{calculate_partition_entry_array_crc32, crc32};
pub use error::{Error, Result};
pub use gpt::{
    decode_gpt_header, decode_gpt_partition_entry_array, encode_gpt_header,
    encode_gpt_partition_entry_array, GptError, GptHeader, GptPartitionEntry,
};
pub use guid::Guid;
pub use mbr::{decode_mbr, encode_mbr, Mbr, MbrError, MbrInplace, MbrPartition};
pub use table::{merge, MbrSource, MergeConfig, PartitionTable, DEFAULT_SECTOR_SIZE};
