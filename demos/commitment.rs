// SPDX short identifier: Unlicense

use commitments::{
    common::*,
    blinding::balancing_opening
};

fn main() {
    //Toy parameters, small enough to follow by hand: G = 5, H = 7.
    //Never use these for anything real, anyone can find a second opening.
    let toy = AdditiveCommitter::new(IntegerGroup::new(5, 7));

    let c1 = toy.commit(&Opening::new(50, 10)); //50*5 + 10*7 = 320
    let c2 = toy.commit(&Opening::new(30, 20)); //30*5 + 20*7 = 290
    //320 + 290 = 610 = 80*5 + 30*7
    assert_eq!(toy.combine(&c1, &c2).unwrap(), toy.commit(&Opening::new(80, 30)));


    //The real thing: Ristretto, with H hashed from G
    let committer = AdditiveCommitter::new(RistrettoGroup::new());

    //Commit to a value, publish the commitment and keep the opening secret
    let (commitment, opening) = committer.commit_random(123);
    //...later, reveal the opening
    assert!(committer.verify(&commitment, &opening));
    assert!(!committer.verify(&commitment, &Opening::new(124, opening.blinding.clone())));


    //Spend 100 into 60 + 40 without revealing any of them
    let input = Opening::random(100);
    let out1 = Opening::random(60);
    let out2 = balancing_opening(&[input.clone()], &[out1.clone()], 40);

    let checker = BalanceChecker::new(committer);
    let committer = checker.committer();
    let ins = vec!(committer.commit(&input));
    let outs = vec!(committer.commit(&out1), committer.commit(&out2));
    assert!(checker.check_balance(&ins, &outs).unwrap());


    //Hash commitments bind and hide too, but can't be added
    let hash = HashCommitter::new();
    let h1 = hash.commit(&Opening::new(100, 555));
    assert_eq!(h1, hash.commit(&Opening::new(100, 555)));
    assert_eq!(hash.combine(&h1, &h1), Err(CommitmentError::UnsupportedOperation));
}
