//! SQL for the PostgreSQL backend.
//!
//! Migrations are safe to run on every startup: each statement either
//! creates something that is missing or does nothing. The item name lives in
//! column `item`; databases created before that rename still carry `name`,
//! which [`RENAME_LEGACY_NAME_COLUMN`] moves over.

pub const CREATE_INVENTORY: &str = "CREATE TABLE IF NOT EXISTS inventory (
    id INT PRIMARY KEY,
    uniform_type TEXT,
    gender TEXT,
    item TEXT,
    style TEXT,
    size TEXT,
    quantity INT NOT NULL
)";

pub const RENAME_LEGACY_NAME_COLUMN: &str = "DO $$
BEGIN
    IF EXISTS (
        SELECT 1 FROM information_schema.columns
        WHERE table_name = 'inventory' AND column_name = 'name'
    ) AND NOT EXISTS (
        SELECT 1 FROM information_schema.columns
        WHERE table_name = 'inventory' AND column_name = 'item'
    ) THEN
        ALTER TABLE inventory RENAME COLUMN name TO item;
    END IF;
END $$";

pub const ADD_MISSING_COLUMNS: [&str; 5] = [
    "ALTER TABLE inventory ADD COLUMN IF NOT EXISTS uniform_type TEXT",
    "ALTER TABLE inventory ADD COLUMN IF NOT EXISTS gender TEXT",
    "ALTER TABLE inventory ADD COLUMN IF NOT EXISTS style TEXT",
    "ALTER TABLE inventory ADD COLUMN IF NOT EXISTS size TEXT",
    "ALTER TABLE inventory ADD COLUMN IF NOT EXISTS item TEXT",
];

pub const CREATE_ISSUED: &str = "CREATE TABLE IF NOT EXISTS issued (
    id SERIAL PRIMARY KEY,
    item_id INT NOT NULL,
    item_name TEXT NOT NULL,
    person TEXT NOT NULL,
    issued_by TEXT NOT NULL,
    issued_at TIMESTAMPTZ NOT NULL
)";

pub const SELECT_ITEMS: &str =
    "SELECT id, uniform_type, gender, item, style, size, quantity FROM inventory";

pub const SELECT_ISSUED: &str =
    "SELECT item_id, item_name, person, issued_by, issued_at FROM issued ORDER BY id";

pub const UPSERT_ITEM: &str = "INSERT INTO inventory (id, uniform_type, gender, item, style, size, quantity)
    VALUES ($1, $2, $3, $4, $5, $6, $7)
    ON CONFLICT (id) DO UPDATE SET
        uniform_type = EXCLUDED.uniform_type,
        gender = EXCLUDED.gender,
        item = EXCLUDED.item,
        style = EXCLUDED.style,
        size = EXCLUDED.size,
        quantity = EXCLUDED.quantity";

pub const DECREMENT_QUANTITY: &str = "UPDATE inventory SET quantity = quantity - 1 WHERE id = $1";

pub const INSERT_ISSUED: &str = "INSERT INTO issued (item_id, item_name, person, issued_by, issued_at)
    VALUES ($1, $2, $3, $4, $5)";

/// Migration statements in the order they must run.
pub fn migrations() -> Vec<&'static str> {
    let mut statements = vec![CREATE_INVENTORY, RENAME_LEGACY_NAME_COLUMN];
    statements.extend(ADD_MISSING_COLUMNS);
    statements.push(CREATE_ISSUED);
    statements
}
