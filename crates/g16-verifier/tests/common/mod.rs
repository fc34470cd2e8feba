// Copyright 2026 abhirupbanerjee
// Licensed under the Apache License, Version 2.0

//! Genuine Groth16 fixtures for the integration tests.
//! Circuit: y = x² + 5, w = x·y
//! Public inputs: [y, w]
//! Private witness: x

#![allow(dead_code)]

use anyhow::{anyhow, Result};
use ark_bn254::{Bn254, Fr};
use ark_ff::PrimeField;
use ark_groth16::Groth16;
use ark_relations::{
    lc,
    r1cs::{ConstraintSynthesizer, ConstraintSystemRef, SynthesisError, Variable},
};
use ark_snark::SNARK;
use ark_std::rand::{rngs::StdRng, SeedableRng};
use g16_codec::{encode_scalar, Encoding, ProofJson, Scalar, VerificationKeyJson};
use g16_verifier::{Proof, VerificationKey};
use num_bigint::BigUint;

#[derive(Clone)]
struct SquarePlusFive {
    x: Option<Fr>,
    y: Fr,
    w: Fr,
}

impl ConstraintSynthesizer<Fr> for SquarePlusFive {
    fn generate_constraints(self, cs: ConstraintSystemRef<Fr>) -> Result<(), SynthesisError> {
        let y_var = cs.new_input_variable(|| Ok(self.y))?;
        let w_var = cs.new_input_variable(|| Ok(self.w))?;
        let x_var = cs.new_witness_variable(|| self.x.ok_or(SynthesisError::AssignmentMissing))?;
        let x_squared_var = cs.new_witness_variable(|| {
            let x = self.x.ok_or(SynthesisError::AssignmentMissing)?;
            Ok(x * x)
        })?;

        cs.enforce_constraint(lc!() + x_var, lc!() + x_var, lc!() + x_squared_var)?;
        cs.enforce_constraint(
            lc!() + x_squared_var + (Fr::from(5u64), Variable::One),
            lc!() + Variable::One,
            lc!() + y_var,
        )?;
        cs.enforce_constraint(lc!() + x_var, lc!() + y_var, lc!() + w_var)?;

        Ok(())
    }
}

pub struct Fixture {
    pub vk: VerificationKey,
    pub proof: Proof,
    pub inputs: Vec<Fr>,
    pub ark_vk: ark_groth16::VerifyingKey<Bn254>,
    pub ark_proof: ark_groth16::Proof<Bn254>,
}

impl Fixture {
    /// Setup and prove with witness `x`, deterministic in `seed`.
    pub fn generate(x: u64, seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        let x = Fr::from(x);
        let y = x * x + Fr::from(5u64);
        let w = x * y;
        let circuit = SquarePlusFive { x: Some(x), y, w };

        let (pk, ark_vk) = Groth16::<Bn254>::circuit_specific_setup(circuit.clone(), &mut rng)
            .map_err(|e| anyhow!("setup: {e}"))?;
        let ark_proof =
            Groth16::<Bn254>::prove(&pk, circuit, &mut rng).map_err(|e| anyhow!("prove: {e}"))?;

        let vk = VerificationKey {
            alpha: ark_vk.alpha_g1,
            beta: ark_vk.beta_g2,
            gamma: ark_vk.gamma_g2,
            delta: ark_vk.delta_g2,
            ic: ark_vk.gamma_abc_g1.clone(),
        };
        let proof = Proof {
            a: ark_proof.a,
            b: ark_proof.b,
            c: ark_proof.c,
        };

        Ok(Self {
            vk,
            proof,
            inputs: vec![y, w],
            ark_vk,
            ark_proof,
        })
    }

    pub fn vk_json(&self, encoding: Encoding) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&VerificationKeyJson::from_key(&self.vk, encoding))?)
    }

    pub fn proof_json(&self, encoding: Encoding) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(&ProofJson::from_proof(&self.proof, encoding))?)
    }

    pub fn scalars(&self) -> Vec<Scalar> {
        self.inputs.iter().map(|f| to_scalar(*f)).collect()
    }

    pub fn input_strings(&self, encoding: Encoding) -> Vec<String> {
        self.scalars().iter().map(|s| encode_scalar(s, encoding)).collect()
    }
}

pub fn to_scalar(f: Fr) -> Scalar {
    Scalar::new(BigUint::from(f.into_bigint()))
}
