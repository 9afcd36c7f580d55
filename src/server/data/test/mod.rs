mod coupon;
