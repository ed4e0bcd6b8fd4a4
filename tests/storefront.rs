use std::cell::RefCell;
use std::rc::Rc;

use vitrine::cache::{FileStore, KvStore, MemoryStore};
use vitrine::cart::{CartEvent, CartTotals};
use vitrine::catalog::ProductId;
use vitrine::{FeedStatus, StoreConfig, Storefront};

const FEED: &str = "id,nome,preco,descricao,imagem
1,\"Bolo, fatia\",15.50,Delicioso,img1.png
2,Torta,22.00,,img2.png
x,Invalido,10,,img3.png
";

#[test]
fn test_reference_scenario() {
    let mut shop = Storefront::new(&StoreConfig::default(), MemoryStore::new());
    assert_eq!(
        shop.ingest_feed(Ok(FEED.to_string())),
        &FeedStatus::Loaded { count: 2 }
    );

    let records = shop.catalog().records();
    assert_eq!(records[0].id, ProductId::new(1).unwrap());
    assert_eq!(records[0].name, "Bolo, fatia");
    assert_eq!(records[0].unit_price.amount_cents, 1550);
    assert_eq!(records[0].description, "Delicioso");
    assert_eq!(records[1].id, ProductId::new(2).unwrap());
    assert_eq!(records[1].name, "Torta");
    assert_eq!(records[1].unit_price.amount_cents, 2200);
    assert_eq!(records[1].description, "Sem descrição");

    shop.add_to_cart(ProductId::new(1).unwrap());
    shop.add_to_cart(ProductId::new(1).unwrap());
    shop.add_to_cart(ProductId::new(2).unwrap());

    let totals = shop.totals();
    assert_eq!(totals.total_items, 3);
    assert_eq!(totals.total_price.display_amount(), "53.00");
}

#[test]
fn test_checkout_message_and_link() {
    let mut config = StoreConfig::default();
    config.checkout.phone = "5500000000000".to_string();

    let mut shop = Storefront::new(&config, MemoryStore::new());
    shop.ingest_feed(Ok(FEED.to_string()));
    shop.add_to_cart(ProductId::new(1).unwrap());
    shop.add_to_cart(ProductId::new(1).unwrap());
    shop.add_to_cart(ProductId::new(2).unwrap());

    let handoff = shop.checkout().unwrap();
    assert_eq!(
        handoff.message,
        "*Ola! Gostaria de fazer um pedido:*\n\n\
         *Bolo, fatia*\nQuantidade: 2\nPreco unitario: R$ 15.50\nSubtotal: R$ 31.00\n\n\
         *Torta*\nQuantidade: 1\nPreco unitario: R$ 22.00\nSubtotal: R$ 22.00\n\n\
         *TOTAL: R$ 53.00*\n\n\
         Aguardo confirmacao!"
    );
    assert!(handoff
        .link
        .starts_with("https://wa.me/5500000000000?text=*Ola!%20Gostaria"));
    assert!(!handoff.link.contains(' '));
    assert!(!handoff.link.contains('\n'));
}

#[test]
fn test_file_backed_cart_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::default();

    {
        let mut shop = Storefront::new(&config, FileStore::open(dir.path()).unwrap());
        shop.ingest_feed(Ok(FEED.to_string()));
        shop.add_to_cart(ProductId::new(2).unwrap());
        shop.add_to_cart(ProductId::new(1).unwrap());
        shop.add_to_cart(ProductId::new(2).unwrap());
        shop.remove_from_cart(ProductId::new(1).unwrap());
    }

    // No feed this time: the cart hydrates from its own snapshots.
    let shop = Storefront::new(&config, FileStore::open(dir.path()).unwrap());
    let entries = shop.cart().entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, ProductId::new(2).unwrap());
    assert_eq!(entries[0].name, "Torta");
    assert_eq!(entries[0].quantity, 2);
    assert_eq!(shop.totals().total_price.amount_cents, 4400);
}

#[test]
fn test_corrupt_stored_cart_does_not_block_startup() {
    let mut store = MemoryStore::new();
    store.set("vitrine-cart", b"\x00\x01garbage").unwrap();

    let mut shop = Storefront::new(&StoreConfig::default(), store);
    assert!(shop.cart().is_empty());

    shop.ingest_feed(Ok(FEED.to_string()));
    shop.add_to_cart(ProductId::new(1).unwrap());
    assert_eq!(shop.totals().total_items, 1);
}

#[test]
fn test_listener_sees_storefront_mutations() {
    let badge = Rc::new(RefCell::new(0u64));
    let sink = Rc::clone(&badge);

    let mut shop = Storefront::new(&StoreConfig::default(), MemoryStore::new());
    shop.cart_mut()
        .subscribe(move |_: &CartEvent, totals: &CartTotals| {
            *sink.borrow_mut() = totals.total_items;
        });

    shop.ingest_feed(Ok(FEED.to_string()));
    shop.add_to_cart(ProductId::new(1).unwrap());
    shop.add_to_cart(ProductId::new(2).unwrap());
    assert_eq!(*badge.borrow(), 2);

    shop.remove_from_cart(ProductId::new(2).unwrap());
    assert_eq!(*badge.borrow(), 1);
}
