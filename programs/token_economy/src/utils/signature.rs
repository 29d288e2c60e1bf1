use anchor_lang::prelude::*;
use anchor_lang::solana_program::ed25519_program;
use anchor_lang::solana_program::hash::hashv;
use anchor_lang::solana_program::instruction::Instruction;
use anchor_lang::solana_program::sysvar::instructions::{
    load_current_index_checked, load_instruction_at_checked,
};
use crate::constants::CLAIM_DOMAIN_SEPARATOR;
use crate::error::*;

/// ===== ED25519 PROGRAM INSTRUCTION LAYOUT =====
///
/// [num_signatures: u8][padding: u8][offsets: 14 bytes per signature][payload...]

pub const PUBKEY_SERIALIZED_SIZE: usize = 32;
pub const SIGNATURE_SERIALIZED_SIZE: usize = 64;
pub const SIGNATURE_OFFSETS_SERIALIZED_SIZE: usize = 14;
pub const SIGNATURE_OFFSETS_START: usize = 2;

/// Instruction index meaning "the ed25519 instruction's own data"
pub const CURRENT_INSTRUCTION_INDEX: u16 = u16::MAX;

/**
 * The content a receiver authorizes when signing a claim
 *
 * Every field that affects the claim is bound into the digest, together with
 * the program id and the round, so a signature is only ever valid for one
 * (round, receiver, amount, nonce, deadline) combination.
 */
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClaimMessage {
    pub round: Pubkey,
    pub receiver: Pubkey,
    pub amount: u64,
    pub nonce: u64,
    pub deadline: i64,
}

impl ClaimMessage {
    /// Domain separated digest the receiver signs
    pub fn digest(&self, program_id: &Pubkey) -> [u8; 32] {
        hashv(&[
            CLAIM_DOMAIN_SEPARATOR.as_bytes(),
            program_id.as_ref(),
            self.round.as_ref(),
            self.receiver.as_ref(),
            &self.amount.to_le_bytes(),
            &self.nonce.to_le_bytes(),
            &self.deadline.to_le_bytes(),
        ])
        .to_bytes()
    }
}

/// Signer, signature and message carried by an ed25519 program instruction
#[derive(Debug)]
pub struct SignedPayload<'a> {
    pub signer: Pubkey,
    pub signature: &'a [u8],
    pub message: &'a [u8],
}

fn read_u16(data: &[u8], at: usize) -> Result<u16> {
    let bytes = data
        .get(at..at + 2)
        .ok_or(TokenEconomyError::InvalidSignature)?;
    Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
}

fn read_slice(data: &[u8], offset: u16, len: usize) -> Result<&[u8]> {
    let start = offset as usize;
    data.get(start..start + len)
        .ok_or_else(|| error!(TokenEconomyError::InvalidSignature))
}

/**
 * Extracts the single signature verified by an ed25519 program instruction
 *
 * The runtime has already checked the signature cryptographically by the time
 * this program runs; what remains is making sure the instruction verified the
 * key, signature and message we expect. Only instructions carrying exactly
 * one signature whose parts all live in the instruction's own data are
 * accepted.
 */
pub fn parse_ed25519_instruction(ix: &Instruction) -> Result<SignedPayload<'_>> {
    require_keys_eq!(
        ix.program_id,
        ed25519_program::ID,
        TokenEconomyError::InvalidSignature
    );

    let data = ix.data.as_slice();
    require!(
        data.len() >= SIGNATURE_OFFSETS_START + SIGNATURE_OFFSETS_SERIALIZED_SIZE,
        TokenEconomyError::InvalidSignature
    );
    require!(data[0] == 1, TokenEconomyError::InvalidSignature);

    let at = SIGNATURE_OFFSETS_START;
    let signature_offset = read_u16(data, at)?;
    let signature_instruction_index = read_u16(data, at + 2)?;
    let public_key_offset = read_u16(data, at + 4)?;
    let public_key_instruction_index = read_u16(data, at + 6)?;
    let message_data_offset = read_u16(data, at + 8)?;
    let message_data_size = read_u16(data, at + 10)?;
    let message_instruction_index = read_u16(data, at + 12)?;

    require!(
        signature_instruction_index == CURRENT_INSTRUCTION_INDEX
            && public_key_instruction_index == CURRENT_INSTRUCTION_INDEX
            && message_instruction_index == CURRENT_INSTRUCTION_INDEX,
        TokenEconomyError::InvalidSignature
    );

    let public_key = read_slice(data, public_key_offset, PUBKEY_SERIALIZED_SIZE)?;
    let signature = read_slice(data, signature_offset, SIGNATURE_SERIALIZED_SIZE)?;
    let message = read_slice(data, message_data_offset, message_data_size as usize)?;

    let signer = Pubkey::try_from(public_key)
        .map_err(|_| error!(TokenEconomyError::InvalidSignature))?;

    Ok(SignedPayload {
        signer,
        signature,
        message,
    })
}

/// Loads the instruction directly preceding the current one.
pub fn load_signature_instruction(instructions_sysvar: &AccountInfo) -> Result<Instruction> {
    let current_index = load_current_index_checked(instructions_sysvar)?;
    require!(current_index > 0, TokenEconomyError::InvalidSignature);
    let ix = load_instruction_at_checked((current_index - 1) as usize, instructions_sysvar)?;
    Ok(ix)
}

/**
 * Verifies that the receiver authorized exactly this claim
 *
 * Validation Process:
 * 1. The ed25519 instruction verified a signature by the receiver
 * 2. The signed message is the digest of this claim
 * 3. The verified signature is the one submitted with the claim
 * 4. The deadline has not passed
 *
 * The submitting relayer never signs anything here, so it cannot alter any
 * field without invalidating the digest.
 */
pub fn authenticate_claim(
    signature_ix: &Instruction,
    message: &ClaimMessage,
    signature: &[u8; 64],
    program_id: &Pubkey,
    now: i64,
) -> Result<()> {
    let payload = parse_ed25519_instruction(signature_ix)?;
    let digest = message.digest(program_id);

    require_keys_eq!(
        payload.signer,
        message.receiver,
        TokenEconomyError::InvalidSignature
    );
    require!(
        payload.message == digest.as_slice(),
        TokenEconomyError::InvalidSignature
    );
    require!(
        payload.signature == signature.as_slice(),
        TokenEconomyError::InvalidSignature
    );
    require!(now <= message.deadline, TokenEconomyError::Expired);

    Ok(())
}
