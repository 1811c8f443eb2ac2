//! Record codec for encoding/decoding entities to/from bytes.
//!
//! Entity ids live in the tree keys, not in the encoded values, so decoding
//! takes the id recovered from the key.
//!
//! Member format:
//! - Name length (2 bytes, little-endian), name (UTF-8 bytes)
//! - Age (4 bytes, little-endian, two's complement)
//! - Group tag (1 byte: 0 = none, 1 = present), group id (8 bytes,
//!   little-endian, present only when tagged)
//!
//! Group format:
//! - Name length (2 bytes, little-endian), name (UTF-8 bytes)

use crate::error::Error;
use crate::model::{Group, Member};

/// Encode a member's fields (everything except the id).
pub fn encode_member(member: &Member) -> Result<Vec<u8>, Error> {
    let mut buf = Vec::new();
    encode_name(&mut buf, &member.name)?;
    buf.extend_from_slice(&member.age.to_le_bytes());
    match member.group_id {
        Some(group_id) => {
            buf.push(1);
            buf.extend_from_slice(&group_id.to_le_bytes());
        }
        None => buf.push(0),
    }
    Ok(buf)
}

/// Decode a member from its key id and encoded value.
pub fn decode_member(id: u64, data: &[u8]) -> Result<Member, Error> {
    let mut cursor = 0;
    let name = decode_name(data, &mut cursor)?;

    let age_end = cursor + 4;
    let age_bytes: [u8; 4] = data
        .get(cursor..age_end)
        .and_then(|s| s.try_into().ok())
        .ok_or_else(|| Error::InvalidData("member record truncated at age".into()))?;
    let age = i32::from_le_bytes(age_bytes);
    cursor = age_end;

    let tag = *data
        .get(cursor)
        .ok_or_else(|| Error::InvalidData("member record truncated at group tag".into()))?;
    cursor += 1;

    let group_id = match tag {
        0 => None,
        1 => {
            let id_end = cursor + 8;
            let id_bytes: [u8; 8] = data
                .get(cursor..id_end)
                .and_then(|s| s.try_into().ok())
                .ok_or_else(|| Error::InvalidData("member record truncated at group id".into()))?;
            cursor = id_end;
            Some(u64::from_le_bytes(id_bytes))
        }
        other => {
            return Err(Error::InvalidData(format!(
                "unknown group tag: {}",
                other
            )))
        }
    };

    if cursor != data.len() {
        return Err(Error::InvalidData("trailing bytes in member record".into()));
    }

    Ok(Member {
        id,
        name,
        age,
        group_id,
    })
}

/// Encode a group's fields (everything except the id).
pub fn encode_group(group: &Group) -> Result<Vec<u8>, Error> {
    let mut buf = Vec::new();
    encode_name(&mut buf, &group.name)?;
    Ok(buf)
}

/// Decode a group from its key id and encoded value.
pub fn decode_group(id: u64, data: &[u8]) -> Result<Group, Error> {
    let mut cursor = 0;
    let name = decode_name(data, &mut cursor)?;
    if cursor != data.len() {
        return Err(Error::InvalidData("trailing bytes in group record".into()));
    }
    Ok(Group { id, name })
}

/// Encode a tree key from an entity id.
pub fn encode_key(id: u64) -> [u8; 8] {
    // Big-endian so lexicographic key order equals ascending id order.
    id.to_be_bytes()
}

/// Decode an entity id from a tree key.
pub fn decode_key(key: &[u8]) -> Result<u64, Error> {
    let bytes: [u8; 8] = key.try_into().map_err(|_| Error::InvalidKey)?;
    Ok(u64::from_be_bytes(bytes))
}

fn encode_name(buf: &mut Vec<u8>, name: &str) -> Result<(), Error> {
    let bytes = name.as_bytes();
    if bytes.len() > u16::MAX as usize {
        return Err(Error::InvalidData("name too long".into()));
    }
    buf.extend_from_slice(&(bytes.len() as u16).to_le_bytes());
    buf.extend_from_slice(bytes);
    Ok(())
}

fn decode_name(data: &[u8], cursor: &mut usize) -> Result<String, Error> {
    let len_end = *cursor + 2;
    let len_bytes: [u8; 2] = data
        .get(*cursor..len_end)
        .and_then(|s| s.try_into().ok())
        .ok_or_else(|| Error::InvalidData("record truncated at name length".into()))?;
    let len = u16::from_le_bytes(len_bytes) as usize;
    *cursor = len_end;

    let name_end = *cursor + len;
    let name_bytes = data
        .get(*cursor..name_end)
        .ok_or_else(|| Error::InvalidData("record truncated at name".into()))?;
    let name = std::str::from_utf8(name_bytes)
        .map_err(|e| Error::InvalidData(format!("name is not valid UTF-8: {}", e)))?
        .to_string();
    *cursor = name_end;

    Ok(name)
}
