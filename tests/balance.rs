// SPDX short identifier: Unlicense

use commitments::{
    common::*,
    blinding::{balancing_opening, excess}
};

fn checker() -> BalanceChecker<RistrettoGroup> {
    return BalanceChecker::new(AdditiveCommitter::new(RistrettoGroup::new()))
}

#[test]
fn balanced_test() {
    let checker = checker();
    let committer = checker.committer();

    //100 in, 60 + 40 out
    let input = Opening::random(100);
    let out1 = Opening::random(60);
    let out2 = balancing_opening(&[input.clone()], &[out1.clone()], 40);

    let ins = vec!(committer.commit(&input));
    let outs = vec!(committer.commit(&out1), committer.commit(&out2));
    assert!(checker.check_balance(&ins, &outs).unwrap());

    //an output of 41 breaks it, whatever its blinding
    for blinding in [out2.blinding.clone(), random_blinding()] {
        let outs = vec!(committer.commit(&out1), committer.commit(&Opening::new(41, blinding)));
        assert!(!checker.check_balance(&ins, &outs).unwrap());
    }
}

#[test]
fn independent_blindings_test() {
    let checker = checker();
    let committer = checker.committer();

    let inputs = vec!(Opening::random(100));
    let outputs = vec!(Opening::random(60), Opening::random(40));
    let ins: Vec<Commitment> = inputs.iter().map(|o| committer.commit(o)).collect();
    let outs: Vec<Commitment> = outputs.iter().map(|o| committer.commit(o)).collect();

    //the blindings don't cancel on their own...
    assert!(!checker.check_balance(&ins, &outs).unwrap());
    //...but the published residual accounts for them
    let residual = excess(&inputs, &outputs);
    assert!(checker.check_balance_with_excess(&ins, &outs, &BigInt::from(0), &residual).unwrap());

    let tampered = vec!(outs[0].clone(), committer.commit(&Opening::new(41, outputs[1].blinding.clone())));
    assert!(!checker.check_balance_with_excess(&ins, &tampered, &BigInt::from(0), &residual).unwrap());
}

#[test]
fn fee_test() {
    //c1 + c2 + c3 == c4 + c5 + fee
    let checker = checker();
    let committer = checker.committer();

    let inputs = vec!(Opening::random(100_000), Opening::random(50_000), Opening::random(200_000));
    let out1 = Opening::random(175_000);
    let out2 = balancing_opening(&inputs, &[out1.clone()], 150_000);

    let ins: Vec<Commitment> = inputs.iter().map(|o| committer.commit(o)).collect();
    let outs = vec!(committer.commit(&out1), committer.commit(&out2));

    assert!(checker.check_balance_with_extra(&ins, &outs, &BigInt::from(25_000)).unwrap());
    assert!(!checker.check_balance_with_extra(&ins, &outs, &BigInt::from(24_999)).unwrap());
    assert!(!checker.check_balance(&ins, &outs).unwrap());

    //paying the fee into an explicit output is the same thing
    let with_fee = [outs.clone(), vec!(committer.commit_value(&BigInt::from(25_000)))].concat();
    assert!(checker.check_balance(&ins, &with_fee).unwrap());
}

#[test]
fn toy_group_test() {
    let checker = BalanceChecker::new(AdditiveCommitter::new(IntegerGroup::new(5, 7)));
    let committer = checker.committer();

    let ins = vec!(committer.commit(&Opening::new(100, 30)));
    let outs = vec!(committer.commit(&Opening::new(60, 10)), committer.commit(&Opening::new(40, 20)));
    assert!(checker.check_balance(&ins, &outs).unwrap());

    let outs = vec!(committer.commit(&Opening::new(60, 10)), committer.commit(&Opening::new(41, 20)));
    assert!(!checker.check_balance(&ins, &outs).unwrap());
}

#[test]
fn mismatch_test() {
    let checker = checker();
    let committer = checker.committer();
    let ins = vec!(committer.commit(&Opening::new(10, 1)));

    let hashed = vec!(HashCommitter::new().commit(&Opening::new(10, 1)));
    assert_eq!(checker.check_balance(&ins, &hashed), Err(CommitmentError::EngineMismatch));
    assert_eq!(checker.check_balance(&hashed, &ins), Err(CommitmentError::EngineMismatch));

    let other = AdditiveCommitter::new(RistrettoGroup::from_seed(b"other"));
    let foreign = vec!(other.commit(&Opening::new(10, 1)));
    assert_eq!(checker.check_balance(&ins, &foreign), Err(CommitmentError::EngineMismatch));
}
